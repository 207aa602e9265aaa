//! Download history per user.

use std::collections::BTreeMap;

use catalog::{Book, BookId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::store::{KeyValueStore, keys, load_json, save_json};

/// One download, with a snapshot of the book as it was at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub book_id: BookId,
    pub timestamp: DateTime<Utc>,
    pub book: Book,
}

/// Append-only download history keyed by user email.
#[derive(Debug, Clone, Default)]
pub struct DownloadSystem {
    downloads: BTreeMap<String, Vec<DownloadRecord>>,
}

impl DownloadSystem {
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(Self {
            downloads: load_json(store, keys::DOWNLOADS)?,
        })
    }

    /// Append a download of `book` to the user's history.
    pub fn record(
        &mut self,
        store: &mut dyn KeyValueStore,
        email: &str,
        book: &Book,
    ) -> Result<DownloadRecord> {
        let record = DownloadRecord {
            book_id: book.id,
            timestamp: Utc::now(),
            book: book.clone(),
        };
        self.downloads
            .entry(email.to_string())
            .or_default()
            .push(record.clone());
        save_json(store, keys::DOWNLOADS, &self.downloads)?;

        debug!("Recorded download of book {} for {}", book.id, email);
        Ok(record)
    }

    /// Oldest first
    pub fn list(&self, email: &str) -> &[DownloadRecord] {
        self.downloads.get(email).map(|v| v.as_slice()).unwrap_or(&[])
    }
}
