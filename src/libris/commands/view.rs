use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

/// Full printout of the record at `index`.
pub fn run(catalog: &Catalog, index: usize) -> Result<CmdResult> {
    let key = catalog.get(index)?;
    let entry = catalog
        .entry(key)
        .expect("key from get() is live");

    let detail = entry.borrow().to_string();
    Ok(CmdResult::default().with_detail(detail))
}
