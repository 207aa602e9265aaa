//! Core domain types for the book catalog.
//!
//! A `Book` is immutable once loaded; the `Catalog` owns the ordered
//! candidate list and an id index over it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a book within a catalog
pub type BookId = u32;

// =============================================================================
// Book
// =============================================================================

/// A single book record.
///
/// `size` is kept as the display string shown next to the download action
/// (for example `"2.4 MB"`), `file` is the location the download points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub category: String,
    pub language: String,
    pub format: String,
    pub description: String,
    pub pages: u32,
    pub size: String,
    pub file: String,
    /// Single glyph shown in place of a cover image
    pub cover: String,
}

impl Book {
    /// File name offered when the book is downloaded, e.g. `"Title.pdf"`
    pub fn download_name(&self) -> String {
        format!("{}.{}", self.title, self.format.to_lowercase())
    }
}

// =============================================================================
// Catalog - the candidate list
// =============================================================================

/// The full, ordered candidate list plus an index by id.
///
/// Order is the order records were inserted (file order for loaded
/// catalogs); the filter and paginator rely on it being stable.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) books: Vec<Book>,
    pub(crate) by_id: HashMap<BookId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// All books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Get a book by ID
    pub fn get_book(&self, id: BookId) -> Option<&Book> {
        self.by_id.get(&id).map(|&pos| &self.books[pos])
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book.
    ///
    /// A second book with an id already present is still appended but the
    /// index keeps pointing at the first one; `validate` reports it.
    pub fn insert_book(&mut self, book: Book) {
        self.by_id.entry(book.id).or_insert(self.books.len());
        self.books.push(book);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for book in iter {
            catalog.insert_book(book);
        }
        catalog
    }
}
