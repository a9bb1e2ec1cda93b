use crate::model::Entry;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of a listing: the 1-based display index and a snapshot of the
/// record at the time of the command.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub index: usize,
    pub entry: Entry,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedEntry>,
    pub messages: Vec<CmdMessage>,
    /// Full-record printout, when the command produces one.
    pub detail: Option<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedEntry>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

pub(crate) fn snapshot(catalog: &crate::catalog::Catalog) -> Vec<ListedEntry> {
    catalog
        .iter()
        .enumerate()
        .map(|(i, (_, entry))| ListedEntry {
            index: i + 1,
            entry: entry.borrow().clone(),
        })
        .collect()
}
