//! Catalog building and validation.
//!
//! Loads the candidate list from disk, checks its invariants and answers
//! the "which values exist" questions the select-style filters need.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a `books.dat` file.
    ///
    /// Steps:
    /// 1. Parse the file (lines in parallel, file order kept)
    /// 2. Build the id index
    /// 3. Validate invariants
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);

        let books = parser::parse_books(path)?;
        let catalog: Catalog = books.into_iter().collect();
        catalog.validate()?;

        info!("Loaded {} books", catalog.len());
        Ok(catalog)
    }

    /// Validate catalog invariants
    ///
    /// Check that:
    /// - every id is unique
    /// - every book has a positive page count (progress is computed from it)
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if !seen.insert(book.id) {
                return Err(CatalogError::DuplicateId { id: book.id });
            }
            if book.pages == 0 {
                return Err(CatalogError::InvalidValue {
                    field: "pages".to_string(),
                    value: format!("0 (book {})", book.id),
                });
            }
        }
        Ok(())
    }

    /// Distinct publication years, newest first
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.books.iter().map(|b| b.year).collect();
        years.into_iter().rev().collect()
    }

    /// Distinct languages, sorted
    pub fn languages(&self) -> Vec<&str> {
        self.distinct(|b| &b.language)
    }

    /// Distinct formats, sorted
    pub fn formats(&self) -> Vec<&str> {
        self.distinct(|b| &b.format)
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.distinct(|b| &b.category)
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Book) -> &'a String) -> Vec<&'a str> {
        let values: BTreeSet<&str> = self.books.iter().map(|b| field(b).as_str()).collect();
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn book(id: BookId, year: i32, language: &str) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            author: "Author".to_string(),
            year,
            category: "Research".to_string(),
            language: language.to_string(),
            format: "PDF".to_string(),
            description: String::new(),
            pages: 100,
            size: "1.0 MB".to_string(),
            file: format!("books/{id}.pdf"),
            cover: "📘".to_string(),
        }
    }

    #[test]
    fn test_validate_duplicate_id() {
        let catalog: Catalog = vec![book(1, 2020, "english"), book(1, 2021, "english")]
            .into_iter()
            .collect();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { id: 1 })
        ));
        // the index keeps the first record
        assert_eq!(catalog.get_book(1).unwrap().year, 2020);
    }

    #[test]
    fn test_validate_zero_pages() {
        let mut bad = book(1, 2020, "english");
        bad.pages = 0;
        let catalog: Catalog = std::iter::once(bad).collect();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_distinct_values() {
        let catalog: Catalog = vec![
            book(1, 2020, "русский"),
            book(2, 2023, "english"),
            book(3, 2020, "english"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.years(), vec![2023, 2020]);
        assert_eq!(catalog.languages(), vec!["english", "русский"]);
        assert_eq!(catalog.formats(), vec!["PDF"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1::A::X::2020::C::english::PDF::10::1.0 MB::a.pdf::📘::a").unwrap();
        writeln!(file, "2::B::Y::2021::C::english::PDF::20::1.0 MB::b.pdf::📘::b").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_book(2).unwrap().title, "B");
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1::A::X::2020::C::english::PDF::10::1.0 MB::a.pdf::📘::a").unwrap();
        writeln!(file, "1::B::Y::2021::C::english::PDF::20::1.0 MB::b.pdf::📘::b").unwrap();

        assert!(Catalog::load_from_file(file.path()).is_err());
    }
}
