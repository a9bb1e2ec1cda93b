use super::CatalogStore;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::wire;
use std::io::Cursor;

/// In-memory persistence for testing and development. Keeps the catalog's
/// binary form in a buffer; `None` models a file that does not exist yet.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the buffer, e.g. with hand-crafted or corrupted bytes.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { saved: Some(bytes) }
    }

    pub fn saved_bytes(&self) -> Option<&[u8]> {
        self.saved.as_deref()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        match &self.saved {
            None => Ok(Catalog::new()),
            Some(bytes) => wire::read_catalog(&mut Cursor::new(bytes)),
        }
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        let mut buf = Vec::new();
        wire::write_catalog(&mut buf, catalog)?;
        self.saved = Some(buf);
        Ok(())
    }
}
