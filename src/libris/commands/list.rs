use crate::catalog::Catalog;
use crate::commands::{snapshot, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed(snapshot(catalog));
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("There are no entries in the catalog."));
    }
    Ok(result)
}
