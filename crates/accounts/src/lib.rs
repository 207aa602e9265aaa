//! # Accounts Crate
//!
//! Per-user state of the catalog: accounts, favorites, bookmarks and
//! download history, persisted through a [`KeyValueStore`].
//!
//! ## Components
//!
//! - **store**: the `KeyValueStore` trait, `MemoryStore` and `JsonFileStore`
//! - **users**: registration, login, the current session
//! - **favorites**: favorite book ids per user
//! - **bookmarks**: reading position per user and book
//! - **downloads**: download history per user
//!
//! Each system loads its key once and writes through on every change.
//! Stores are passed in explicitly, so the systems work with any backend.
//!
//! ## Example Usage
//!
//! ```ignore
//! use accounts::{FavoritesSystem, JsonFileStore, UserSystem};
//!
//! let mut store = JsonFileStore::open("catalog-state.json")?;
//! let mut users = UserSystem::load(&store)?;
//! users.login(&mut store, "anna@example.com", "secret")?;
//!
//! let mut favorites = FavoritesSystem::load(&store)?;
//! let email = users.require_user()?.email.clone();
//! favorites.toggle(&mut store, &email, 3)?;
//! ```

pub mod bookmarks;
pub mod downloads;
pub mod error;
pub mod favorites;
pub mod store;
pub mod users;

// Re-export commonly used types
pub use bookmarks::{Bookmark, BookmarkSystem};
pub use downloads::{DownloadRecord, DownloadSystem};
pub use error::{AccountError, Result};
pub use favorites::FavoritesSystem;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use users::{User, UserSystem};
