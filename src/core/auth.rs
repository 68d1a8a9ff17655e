//! Account lookup and password check.
//!
//! This is a demo login: the digest is a username-salted SHA-256 with no key
//! stretching. It identifies who is punching; it does not protect anything.

use crate::errors::{AppError, AppResult};
use crate::models::account::UserAccount;
use sha2::{Digest, Sha256};

const DIGEST_PREFIX: &str = "sha256$";

/// Compute the stored form of a password for `username`.
pub fn password_digest(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{DIGEST_PREFIX}{}", hex::encode(hasher.finalize()))
}

/// Accounts known to the current session.
#[derive(Debug, Default, Clone)]
pub struct UserDirectory {
    accounts: Vec<UserAccount>,
}

impl UserDirectory {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self { accounts }
    }

    pub fn user_info(&self, username: &str) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Digest equality check; unknown users simply fail.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.user_info(username)
            .is_some_and(|a| a.password_digest == password_digest(username, password))
    }

    /// Authenticate and return the account, with a typed reason on failure.
    pub fn login(&self, username: &str, password: &str) -> AppResult<&UserAccount> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::EmptyUsername);
        }

        let account = self
            .user_info(username)
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;

        if !self.authenticate(username, password) {
            return Err(AppError::AuthenticationFailed(username.to_string()));
        }

        Ok(account)
    }
}
