//! Error types for the accounts crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from account operations and the storage behind them
#[derive(Error, Debug)]
pub enum AccountError {
    /// Registration with an email that is already taken
    #[error("A user with email {email} already exists")]
    UserExists { email: String },

    /// Login with an unknown email or a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The operation needs a logged-in user
    #[error("Not logged in")]
    NotLoggedIn,

    /// Reading or writing the state file failed
    #[error("Storage I/O error at {}: {source}", .path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be (de)serialized
    #[error("Malformed stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, AccountError>;
