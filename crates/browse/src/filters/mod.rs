//! Filter implementations for the catalog pipeline.
//!
//! One filter per kind of criterion; `BookFilter` builds a pipeline from
//! whichever criteria are currently active.

pub mod exact_match;
pub mod substring;
pub mod year;

// Re-export for convenience
pub use exact_match::{ExactField, ExactMatchFilter};
pub use substring::{SubstringFilter, TextField};
pub use year::YearFilter;
