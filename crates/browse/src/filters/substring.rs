//! Case-insensitive substring search over free-text fields.

use crate::traits::Filter;
use catalog::Book;

/// Free-text fields searched by substring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Author,
}

/// Keeps books whose field contains the needle, ignoring case.
pub struct SubstringFilter {
    field: TextField,
    needle: String,
}

impl SubstringFilter {
    /// The needle is lowercased once here rather than per book.
    pub fn new(field: TextField, needle: &str) -> Self {
        Self {
            field,
            needle: needle.to_lowercase(),
        }
    }
}

impl Filter for SubstringFilter {
    fn name(&self) -> &str {
        match self.field {
            TextField::Title => "TitleFilter",
            TextField::Author => "AuthorFilter",
        }
    }

    fn matches(&self, book: &Book) -> bool {
        let haystack = match self.field {
            TextField::Title => &book.title,
            TextField::Author => &book.author,
        };
        haystack.to_lowercase().contains(&self.needle)
    }
}
