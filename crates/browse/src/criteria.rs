//! Filter criteria: one slot per supported field.
//!
//! An empty slot means "no constraint". Values are stored as given; the
//! filters decide how to interpret them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of filterable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Title,
    Author,
    Year,
    Language,
    Format,
    Category,
}

impl FilterKey {
    pub const ALL: [FilterKey; 6] = [
        FilterKey::Title,
        FilterKey::Author,
        FilterKey::Year,
        FilterKey::Language,
        FilterKey::Format,
        FilterKey::Category,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Title => "title",
            FilterKey::Author => "author",
            FilterKey::Year => "year",
            FilterKey::Language => "language",
            FilterKey::Format => "format",
            FilterKey::Category => "category",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a key name is not one of the supported fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter key: {0}")]
pub struct UnknownFilterKey(pub String);

impl FromStr for FilterKey {
    type Err = UnknownFilterKey;

    /// Accepts the plain field names plus the `searchTitle`/`searchAuthor`
    /// aliases used by the search boxes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" | "searchTitle" => Ok(FilterKey::Title),
            "author" | "searchAuthor" => Ok(FilterKey::Author),
            "year" => Ok(FilterKey::Year),
            "language" => Ok(FilterKey::Language),
            "format" => Ok(FilterKey::Format),
            "category" => Ok(FilterKey::Category),
            _ => Err(UnknownFilterKey(s.to_string())),
        }
    }
}

/// Current criteria. `Default` is the empty, match-everything state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: String,
    pub author: String,
    pub year: String,
    pub language: String,
    pub format: String,
    pub category: String,
}

impl FilterCriteria {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Title => &self.title,
            FilterKey::Author => &self.author,
            FilterKey::Year => &self.year,
            FilterKey::Language => &self.language,
            FilterKey::Format => &self.format,
            FilterKey::Category => &self.category,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let slot = match key {
            FilterKey::Title => &mut self.title,
            FilterKey::Author => &mut self.author,
            FilterKey::Year => &mut self.year,
            FilterKey::Language => &mut self.language,
            FilterKey::Format => &mut self.format,
            FilterKey::Category => &mut self.category,
        };
        *slot = value.into();
    }

    /// Keys whose slot holds a constraint, in `FilterKey::ALL` order
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        FilterKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}
