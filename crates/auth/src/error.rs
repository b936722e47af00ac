//! Auth errors

use thiserror::Error;

/// Errors from registration and login. None of these mutate any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username: 4-20 characters, letters, digits and underscore only")]
    InvalidUsername,

    #[error("Invalid password: at least 6 characters required")]
    InvalidPassword,

    #[error("Invalid full name: 2-50 characters, letters and spaces only")]
    InvalidFullName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Username {0} is already taken")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] minibank_store::StoreError),
}
