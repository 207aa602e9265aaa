//! Per-user favorite books.

use std::collections::BTreeMap;

use catalog::BookId;

use crate::error::Result;
use crate::store::{KeyValueStore, keys, load_json, save_json};

/// Favorite book ids per user email, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct FavoritesSystem {
    favorites: BTreeMap<String, Vec<BookId>>,
}

impl FavoritesSystem {
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(Self {
            favorites: load_json(store, keys::FAVORITES)?,
        })
    }

    /// Add a favorite. Returns false if it was already there.
    pub fn add(&mut self, store: &mut dyn KeyValueStore, email: &str, book_id: BookId) -> Result<bool> {
        let list = self.favorites.entry(email.to_string()).or_default();
        if list.contains(&book_id) {
            return Ok(false);
        }
        list.push(book_id);
        self.save(store)?;
        Ok(true)
    }

    /// Remove a favorite. Returns false if it was not there.
    pub fn remove(&mut self, store: &mut dyn KeyValueStore, email: &str, book_id: BookId) -> Result<bool> {
        let Some(list) = self.favorites.get_mut(email) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|&id| id != book_id);
        if list.len() == before {
            return Ok(false);
        }
        self.save(store)?;
        Ok(true)
    }

    /// Flip a favorite. Returns whether the book is a favorite afterwards.
    pub fn toggle(&mut self, store: &mut dyn KeyValueStore, email: &str, book_id: BookId) -> Result<bool> {
        if self.is_favorite(email, book_id) {
            self.remove(store, email, book_id)?;
            Ok(false)
        } else {
            self.add(store, email, book_id)?;
            Ok(true)
        }
    }

    /// Drop every favorite of one user.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore, email: &str) -> Result<()> {
        self.favorites.insert(email.to_string(), Vec::new());
        self.save(store)
    }

    pub fn list(&self, email: &str) -> &[BookId] {
        self.favorites.get(email).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_favorite(&self, email: &str, book_id: BookId) -> bool {
        self.list(email).contains(&book_id)
    }

    fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        save_json(store, keys::FAVORITES, &self.favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_add_is_idempotent() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSystem::load(&store).unwrap();

        assert!(favorites.add(&mut store, "a@b.c", 5).unwrap());
        assert!(favorites.add(&mut store, "a@b.c", 2).unwrap());
        assert!(!favorites.add(&mut store, "a@b.c", 5).unwrap());
        assert_eq!(favorites.list("a@b.c"), &[5, 2]);
    }

    #[test]
    fn test_users_are_separate() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSystem::load(&store).unwrap();
        favorites.add(&mut store, "a@b.c", 1).unwrap();

        assert!(favorites.is_favorite("a@b.c", 1));
        assert!(!favorites.is_favorite("x@y.z", 1));
        assert!(favorites.list("x@y.z").is_empty());
    }

    #[test]
    fn test_remove_toggle_clear() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSystem::load(&store).unwrap();

        assert!(!favorites.remove(&mut store, "a@b.c", 1).unwrap());
        assert!(favorites.toggle(&mut store, "a@b.c", 1).unwrap());
        assert!(favorites.toggle(&mut store, "a@b.c", 2).unwrap());
        assert!(!favorites.toggle(&mut store, "a@b.c", 1).unwrap());
        assert_eq!(favorites.list("a@b.c"), &[2]);

        favorites.clear(&mut store, "a@b.c").unwrap();
        assert!(favorites.list("a@b.c").is_empty());

        let reloaded = FavoritesSystem::load(&store).unwrap();
        assert!(reloaded.list("a@b.c").is_empty());
    }

    #[test]
    fn test_persisted() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSystem::load(&store).unwrap();
        favorites.add(&mut store, "a@b.c", 7).unwrap();

        let reloaded = FavoritesSystem::load(&store).unwrap();
        assert!(reloaded.is_favorite("a@b.c", 7));
    }
}
