//! # Catalog Crate
//!
//! The record source of the book catalog: the `Book` type, the ordered
//! candidate list (`Catalog`) and the ways to obtain one.
//!
//! ## Main Components
//!
//! - **types**: `Book`, `BookId`, `Catalog`
//! - **parser**: parse `books.dat` files into `Book` records
//! - **index**: load, validate and query a `Catalog`
//! - **demo**: the built-in demonstration catalog
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/books.dat"))?;
//! let book = catalog.get_book(1).unwrap();
//! println!("{} by {}", book.title, book.author);
//! ```

pub mod demo;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Book, BookId, Catalog};
