use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, Field};

/// Sets one field of the record at `index`. The record is mutated in place
/// through its shared handle, so the change is visible through every
/// catalog holding it — owner and search views alike.
pub fn set_field(catalog: &Catalog, index: usize, field: Field, value: String) -> Result<CmdResult> {
    let key = catalog.get(index)?;
    let entry = catalog
        .entry(key)
        .expect("key from get() is live");

    field.set(&mut entry.borrow_mut(), value);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} updated", field.label())));
    Ok(result)
}

/// Replaces every field of the record at `index` with `replacement`'s
/// values, keeping the record's identity (slots aliasing it see the new
/// values).
pub fn replace(catalog: &Catalog, index: usize, replacement: Entry) -> Result<CmdResult> {
    let key = catalog.get(index)?;
    let entry = catalog
        .entry(key)
        .expect("key from get() is live");

    *entry.borrow_mut() = replacement;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All fields updated"));
    Ok(result)
}
