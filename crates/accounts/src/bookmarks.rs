//! Reading positions ("bookmarks") per user and book.

use std::collections::BTreeMap;

use catalog::{Book, BookId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{KeyValueStore, keys, load_json, save_json};

/// The page a user reached in one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub current_page: u32,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Reading progress in whole percent, capped at 100
    pub fn progress_percent(&self, total_pages: u32) -> u32 {
        if total_pages == 0 {
            return 0;
        }
        let percent = (f64::from(self.current_page) / f64::from(total_pages) * 100.0).round();
        (percent as u32).min(100)
    }
}

/// Bookmarks keyed by user email, then by book id.
#[derive(Debug, Clone, Default)]
pub struct BookmarkSystem {
    bookmarks: BTreeMap<String, BTreeMap<BookId, Bookmark>>,
}

impl BookmarkSystem {
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(Self {
            bookmarks: load_json(store, keys::BOOKMARKS)?,
        })
    }

    /// Record the page a user is on. The page is kept within `[1, book.pages]`.
    pub fn set(
        &mut self,
        store: &mut dyn KeyValueStore,
        email: &str,
        book: &Book,
        page: u32,
    ) -> Result<Bookmark> {
        let bookmark = Bookmark {
            current_page: page.clamp(1, book.pages.max(1)),
            updated_at: Utc::now(),
        };
        self.bookmarks
            .entry(email.to_string())
            .or_default()
            .insert(book.id, bookmark.clone());
        self.save(store)?;
        Ok(bookmark)
    }

    /// Returns false if there was no bookmark to remove.
    pub fn remove(&mut self, store: &mut dyn KeyValueStore, email: &str, book_id: BookId) -> Result<bool> {
        let removed = self
            .bookmarks
            .get_mut(email)
            .and_then(|marks| marks.remove(&book_id))
            .is_some();
        if removed {
            self.save(store)?;
        }
        Ok(removed)
    }

    pub fn get(&self, email: &str, book_id: BookId) -> Option<&Bookmark> {
        self.bookmarks.get(email)?.get(&book_id)
    }

    /// All bookmarks of one user, by book id
    pub fn list(&self, email: &str) -> impl Iterator<Item = (BookId, &Bookmark)> {
        self.bookmarks
            .get(email)
            .into_iter()
            .flat_map(|marks| marks.iter().map(|(&id, mark)| (id, mark)))
    }

    fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        save_json(store, keys::BOOKMARKS, &self.bookmarks)
    }
}
