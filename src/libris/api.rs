//! The API facade: a thin layer over the command modules, generic over the
//! persistence backend. UI clients (the interactive menu, or anything
//! else) go through this type and never touch the catalog internals
//! directly.
//!
//! The facade owns the live catalog for the session plus the store it was
//! loaded from. Search results are handed back as aliasing view catalogs;
//! follow-up operations take the view as an argument so the caller decides
//! which listing an index refers to.

use crate::catalog::{Catalog, EntryRef};
use crate::commands::search::{SearchHits, SearchKey};
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Entry, Field};
use crate::store::CatalogStore;

pub struct LibrisApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
}

impl<S: CatalogStore> LibrisApi<S> {
    /// Loads the catalog from `store`. A backend with nothing saved yet
    /// yields an empty catalog.
    pub fn load(store: S) -> Result<Self> {
        let catalog = store.load()?;
        Ok(Self { store, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Aliasing view of the whole catalog, for flows that present every
    /// record as a selectable list.
    pub fn view_all(&self) -> Catalog {
        self.catalog.view()
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, entry)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn find(&self, key: SearchKey, term: &str) -> Result<SearchHits> {
        commands::search::run(&self.catalog, key, term)
    }

    /// Sets one field of the record at `index` within `list` (a search
    /// view or the full view). The mutation reaches the owning catalog.
    pub fn edit_field(
        &self,
        list: &Catalog,
        index: usize,
        field: Field,
        value: String,
    ) -> Result<CmdResult> {
        commands::edit::set_field(list, index, field, value)
    }

    /// Replaces every field of the record at `index` within `list`.
    pub fn replace_entry(
        &self,
        list: &Catalog,
        index: usize,
        replacement: Entry,
    ) -> Result<CmdResult> {
        commands::edit::replace(list, index, replacement)
    }

    /// Removes the record at `index` of the owning catalog.
    pub fn delete_at(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalog, index)
    }

    /// Removes the record picked out of a view, resolved by identity.
    pub fn delete_record(&mut self, target: &EntryRef) -> Result<CmdResult> {
        commands::delete::run_identity(&mut self.catalog, target)
    }

    pub fn view_entry(&self, list: &Catalog, index: usize) -> Result<CmdResult> {
        commands::view::run(list, index)
    }

    /// Writes the catalog back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.catalog)
    }
}
