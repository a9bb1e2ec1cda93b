use super::CatalogStore;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::wire;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Catalog persistence in a single binary file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileStore {
    /// A missing file means "start with an empty catalog". Any other open
    /// or read failure propagates; the caller decides whether that is
    /// fatal.
    fn load(&self) -> Result<Catalog> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Catalog::new()),
            Err(e) => return Err(e.into()),
        };

        wire::read_catalog(&mut BufReader::new(file))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        wire::write_catalog(&mut writer, catalog)?;
        writer.flush()?;
        Ok(())
    }
}
