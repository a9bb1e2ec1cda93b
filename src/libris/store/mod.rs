//! Persistence backends for the catalog.
//!
//! Persistence is abstracted behind [`CatalogStore`] so the command and API
//! layers can run against [`memory::InMemoryStore`] in tests without
//! touching the filesystem, while the binary uses [`fs::FileStore`].
//!
//! The file discipline is deliberately simple: one read-all-then-close on
//! load, one write-all-then-close on save. No partial streaming, no
//! interleaved reads and writes.

use crate::catalog::Catalog;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving one catalog.
pub trait CatalogStore {
    /// Loads the catalog. A backend with no saved data yet yields an empty
    /// catalog; anything else that goes wrong is an error.
    fn load(&self) -> Result<Catalog>;

    /// Replaces the saved data with `catalog`'s binary form.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
