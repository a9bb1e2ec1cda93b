use clap::Parser;
use libris::api::LibrisApi;
use libris::error::Result;
use libris::session::Session;
use libris::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod menu;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog_path = resolve_catalog(&cli)?;

    let store = FileStore::new(catalog_path);
    let mut api = LibrisApi::load(store)?;

    menu::run(&mut api)?;

    // Failing to write the catalog back at shutdown is fatal.
    api.save()
}

fn resolve_catalog(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.catalog {
        return Ok(path.clone());
    }

    let username = menu::prompt_line("Enter your username: ")?;
    let password = menu::prompt_password("Enter password: ")?;

    let session = Session::login(&cli.credentials, &username, &password)?;
    println!("User {} logged in", session.username);
    Ok(session.catalog_path)
}
