use crate::catalog::Catalog;
use crate::commands::{snapshot, CmdMessage, CmdResult};
use crate::error::Result;

/// Which of the three searchable fields to match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Title,
    Author,
    Publisher,
}

impl SearchKey {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKey::Title => "Book title",
            SearchKey::Author => "Author",
            SearchKey::Publisher => "Publisher",
        }
    }
}

/// The outcome of a search: the aliasing view itself, for follow-up
/// edit/delete/display actions, plus the presentable result.
#[derive(Debug)]
pub struct SearchHits {
    pub view: Catalog,
    pub result: CmdResult,
}

pub fn run(catalog: &Catalog, key: SearchKey, term: &str) -> Result<SearchHits> {
    let view = match key {
        SearchKey::Title => catalog.find_by_title(term),
        SearchKey::Author => catalog.find_by_author(term),
        SearchKey::Publisher => catalog.find_by_publisher(term),
    };

    let mut result = CmdResult::default().with_listed(snapshot(&view));
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No results found for \"{term}\""
        )));
    }

    Ok(SearchHits { view, result })
}
