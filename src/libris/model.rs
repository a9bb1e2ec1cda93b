use std::fmt;

/// One catalog entry: nine free-text fields, each independently owned.
///
/// No field is validated for format — pages, ISBN and publication date are
/// free text on purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    title: String,
    author: String,
    pages: String,
    edition: String,
    language: String,
    publisher: String,
    pubdate: String,
    isbn: String,
    description: String,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> &str {
        &self.pages
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn pubdate(&self) -> &str {
        &self.pubdate
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, value: String) {
        self.title = value;
    }

    pub fn set_author(&mut self, value: String) {
        self.author = value;
    }

    pub fn set_pages(&mut self, value: String) {
        self.pages = value;
    }

    pub fn set_edition(&mut self, value: String) {
        self.edition = value;
    }

    pub fn set_language(&mut self, value: String) {
        self.language = value;
    }

    pub fn set_publisher(&mut self, value: String) {
        self.publisher = value;
    }

    pub fn set_pubdate(&mut self, value: String) {
        self.pubdate = value;
    }

    pub fn set_isbn(&mut self, value: String) {
        self.isbn = value;
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    /// One-line summary used by listings: "author, title (publisher)".
    pub fn summary(&self) -> String {
        format!("{}, {} ({})", self.author, self.title, self.publisher)
    }
}

/// Selector for one of the nine entry fields.
///
/// Drives the edit flow and the serialization order. The order of
/// [`Field::ALL`] is the wire order and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Pages,
    Edition,
    Language,
    Publisher,
    Pubdate,
    Isbn,
    Description,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Author,
        Field::Pages,
        Field::Edition,
        Field::Language,
        Field::Publisher,
        Field::Pubdate,
        Field::Isbn,
        Field::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Book title",
            Field::Author => "Author",
            Field::Pages => "Pages",
            Field::Edition => "Edition",
            Field::Language => "Language",
            Field::Publisher => "Publisher",
            Field::Pubdate => "Publication date",
            Field::Isbn => "ISBN",
            Field::Description => "Description",
        }
    }

    pub fn get<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            Field::Title => entry.title(),
            Field::Author => entry.author(),
            Field::Pages => entry.pages(),
            Field::Edition => entry.edition(),
            Field::Language => entry.language(),
            Field::Publisher => entry.publisher(),
            Field::Pubdate => entry.pubdate(),
            Field::Isbn => entry.isbn(),
            Field::Description => entry.description(),
        }
    }

    pub fn set(&self, entry: &mut Entry, value: String) {
        match self {
            Field::Title => entry.set_title(value),
            Field::Author => entry.set_author(value),
            Field::Pages => entry.set_pages(value),
            Field::Edition => entry.set_edition(value),
            Field::Language => entry.set_language(value),
            Field::Publisher => entry.set_publisher(value),
            Field::Pubdate => entry.set_pubdate(value),
            Field::Isbn => entry.set_isbn(value),
            Field::Description => entry.set_description(value),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book title:       {}", self.title)?;
        writeln!(f, "Author:           {}", self.author)?;
        writeln!(f, "Pages:            {}", self.pages)?;
        writeln!(f, "Edition:          {}", self.edition)?;
        writeln!(f, "Language:         {}", self.language)?;
        writeln!(f, "Publisher:        {}", self.publisher)?;
        writeln!(f, "Publication date: {}", self.pubdate)?;
        writeln!(f, "ISBN:             {}", self.isbn)?;
        writeln!(f, "Description:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)
    }
}
