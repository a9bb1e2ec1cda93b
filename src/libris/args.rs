use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "libris",
    version,
    about = "A personal book catalog for the command line"
)]
pub struct Cli {
    /// Credentials file with username:password:catalog-file lines
    #[arg(long, default_value = "credentials.txt")]
    pub credentials: PathBuf,

    /// Open a catalog file directly, skipping login
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
