use crate::catalog::{Catalog, EntryRef};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};

/// Removes the record at `index` from the catalog.
pub fn run(catalog: &mut Catalog, index: usize) -> Result<CmdResult> {
    let key = catalog.get(index)?;
    let removed = catalog
        .remove(key)
        .expect("key from get() is live");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book removed from the catalog: {}",
        removed.borrow().title()
    )));
    Ok(result)
}

/// Removes the slot holding exactly `target` (record identity, not
/// equality). Used when the record was picked out of a search view and the
/// owning catalog's slot for it has to be found first.
pub fn run_identity(catalog: &mut Catalog, target: &EntryRef) -> Result<CmdResult> {
    let key = catalog
        .slot_of(target)
        .ok_or_else(|| LibrisError::Store("record is not in the catalog".to_string()))?;
    let removed = catalog
        .remove(key)
        .expect("slot_of() returned a live key");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book removed from the catalog: {}",
        removed.borrow().title()
    )));
    Ok(result)
}
