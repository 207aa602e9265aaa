//! Parser for catalog data files.
//!
//! `books.dat` holds one record per line, fields separated by `::`:
//!
//! ```text
//! id::title::author::year::category::language::format::pages::size::file::cover::description
//! ```
//!
//! The description is the last field and keeps any `::` it contains.
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{CatalogError, Result};
use crate::types::Book;
use rayon::prelude::*;
use std::path::Path;

const FIELD_COUNT: usize = 12;

/// Read a whole file, mapping a missing file to `FileNotFound`
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse the books file.
///
/// Lines are parsed in parallel; the returned records keep file order.
pub fn parse_books(path: &Path) -> Result<Vec<Book>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let lines = read_lines(path)?;

    lines
        .par_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Some(parse_book_line(trimmed, &file_name, idx + 1))
        })
        .collect()
}

/// Parse a single non-empty record line
pub fn parse_book_line(line: &str, file: &str, line_no: usize) -> Result<Book> {
    let mut parts = line.splitn(FIELD_COUNT, "::");
    let mut field = |name: &str| {
        parts
            .next()
            .map(str::trim)
            .ok_or_else(|| CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Missing {}", name),
            })
    };

    let id = field("id")?;
    let title = field("title")?;
    let author = field("author")?;
    let year = field("year")?;
    let category = field("category")?;
    let language = field("language")?;
    let format = field("format")?;
    let pages = field("pages")?;
    let size = field("size")?;
    let location = field("file")?;
    let cover = field("cover")?;
    let description = field("description")?;

    let invalid = |name: &str, e: std::num::ParseIntError| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid {}: {}", name, e),
    };

    Ok(Book {
        id: id.parse().map_err(|e| invalid("id", e))?,
        title: title.to_string(),
        author: author.to_string(),
        year: year.parse().map_err(|e| invalid("year", e))?,
        category: category.to_string(),
        language: language.to_string(),
        format: format.to_string(),
        description: description.to_string(),
        pages: pages.parse().map_err(|e| invalid("pages", e))?,
        size: size.to_string(),
        file: location.to_string(),
        cover: cover.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LINE: &str = "7::Теория::Сидоров К.М.::2022::Монография::русский::PDF::412::3.1 MB::books/t.pdf::📗::Анализ :: процессов";

    #[test]
    fn test_parse_book_line() {
        let book = parse_book_line(LINE, "books.dat", 1).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.author, "Сидоров К.М.");
        assert_eq!(book.year, 2022);
        assert_eq!(book.pages, 412);
        assert_eq!(book.cover, "📗");
        assert_eq!(book.description, "Анализ :: процессов");
    }

    #[test]
    fn test_missing_field() {
        let err = parse_book_line("1::Title::Author", "books.dat", 3).unwrap_err();
        match err {
            CatalogError::ParseError { line, reason, .. } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "Missing year");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_number() {
        let line = "x::T::A::2020::C::L::PDF::10::1 MB::f::c::d";
        assert!(matches!(
            parse_book_line(line, "books.dat", 1),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_books_skips_comments_and_keeps_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# catalog").unwrap();
        writeln!(file, "2::B::A::2021::C::english::EPUB::100::1.0 MB::b.epub::📘::second").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "1::A::A::2020::C::english::PDF::100::1.0 MB::a.pdf::📘::first").unwrap();

        let books = parse_books(file.path()).unwrap();
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_missing_file() {
        let result = parse_books(Path::new("/definitely/not/here/books.dat"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
