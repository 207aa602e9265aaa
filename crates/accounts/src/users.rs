//! Local user accounts.
//!
//! Accounts are a per-installation convenience, not a security boundary:
//! the password digest only keeps plain text out of the state file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::{AccountError, Result};
use crate::store::{KeyValueStore, keys, load_json, save_json};

/// A registered user. The email is the key for all per-user state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub joined: DateTime<Utc>,
}

fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Registered users plus the logged-in one.
#[derive(Debug, Clone, Default)]
pub struct UserSystem {
    users: Vec<User>,
    current_user: Option<User>,
}

impl UserSystem {
    /// Read users and the current session from the store.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(Self {
            users: load_json(store, keys::USERS)?,
            current_user: load_json(store, keys::CURRENT_USER)?,
        })
    }

    /// Create an account. Fails if the email is taken.
    pub fn register(
        &mut self,
        store: &mut dyn KeyValueStore,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User> {
        if self.find(email).is_some() {
            return Err(AccountError::UserExists {
                email: email.to_string(),
            });
        }

        let user = User {
            email: email.to_string(),
            name: name.to_string(),
            password_hash: hash_password(password),
            joined: Utc::now(),
        };
        self.users.push(user.clone());
        save_json(store, keys::USERS, &self.users)?;

        info!("Registered user {}", email);
        Ok(user)
    }

    /// Start a session for the user with these credentials.
    pub fn login(
        &mut self,
        store: &mut dyn KeyValueStore,
        email: &str,
        password: &str,
    ) -> Result<User> {
        let hash = hash_password(password);
        let user = self
            .find(email)
            .filter(|u| u.password_hash == hash)
            .cloned()
            .ok_or(AccountError::InvalidCredentials)?;

        save_json(store, keys::CURRENT_USER, &user)?;
        self.current_user = Some(user.clone());

        info!("User {} logged in", email);
        Ok(user)
    }

    /// End the current session, if any.
    pub fn logout(&mut self, store: &mut dyn KeyValueStore) -> Result<()> {
        if let Some(user) = self.current_user.take() {
            info!("User {} logged out", user.email);
        }
        store.remove(keys::CURRENT_USER)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// The current user, or `NotLoggedIn`.
    pub fn require_user(&self) -> Result<&User> {
        self.current_user().ok_or(AccountError::NotLoggedIn)
    }

    pub fn find(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}
