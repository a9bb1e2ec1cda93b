use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;

pub fn run(catalog: &mut Catalog, entry: Entry) -> Result<CmdResult> {
    catalog.add(&entry);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added to the catalog: {}",
        entry.title()
    )));
    Ok(result)
}
