//! Store errors

use thiserror::Error;

/// Errors from the store's save/update/delete contracts.
///
/// A failed operation never mutates the index it was aimed at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User {0} already exists")]
    DuplicateUser(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Account {0} already exists")]
    DuplicateAccount(String),

    #[error("Account {0} not found")]
    AccountNotFound(String),
}
