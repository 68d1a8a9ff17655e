use crate::core::auth::password_digest;
use crate::errors::{AppError, AppResult};

/// Print the digest to paste into an account's `password_digest`.
pub fn handle(username: &str, password: &str) -> AppResult<()> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::EmptyUsername);
    }

    println!("{}", password_digest(username, password));
    Ok(())
}
