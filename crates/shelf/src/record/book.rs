use crate::library::Row;

/// Metadata for a single book edition, one row of the book library.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookRecord {
    /// The ISBN-13 of the edition.
    pub isbn13: String,
    /// Title of the book.
    pub title: String,
    /// Author names joined with `", "`.
    pub authors: String,
    /// Publisher, when known.
    pub publisher: Option<String>,
    /// Year of publication, when known.
    pub year: Option<String>,
    /// Language code, when known.
    pub language: Option<String>,
}

impl BookRecord {
    /// Column names, in the same order as [`Row::cells`].
    pub const HEADER: [&'static str; 6] =
        ["ISBN-13", "Title", "Authors", "Publisher", "Year", "Language"];
}

impl Row for BookRecord {
    fn cells(&self) -> Vec<&str> {
        vec![
            self.isbn13.as_str(),
            self.title.as_str(),
            self.authors.as_str(),
            self.publisher.as_deref().unwrap_or_default(),
            self.year.as_deref().unwrap_or_default(),
            self.language.as_deref().unwrap_or_default(),
        ]
    }
}
