//! Users - bank customers and the accounts they own
//!
//! A user references its accounts by number; the store's account index
//! remains the owner of the account instances. Both sides must be kept in
//! step by whoever mutates them - nothing here enforces it, and deleting
//! one side never cascades into the other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank customer.
///
/// The password hash is opaque to this crate: it is stored and compared
/// as a string, never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    user_id: String,
    username: String,
    password_hash: String,
    full_name: String,
    email: String,
    account_numbers: Vec<String>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            full_name: full_name.into(),
            email: email.into(),
            account_numbers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Account numbers owned by this user, in attachment order.
    pub fn account_numbers(&self) -> &[String] {
        &self.account_numbers
    }

    /// Attach an account. Duplicates are refused (set semantics).
    pub fn add_account(&mut self, account_number: impl Into<String>) -> bool {
        let number = account_number.into();
        if self.account_numbers.contains(&number) {
            return false;
        }
        self.account_numbers.push(number);
        true
    }

    /// Detach an account number. Returns false if it was not attached.
    pub fn remove_account(&mut self, account_number: &str) -> bool {
        let before = self.account_numbers.len();
        self.account_numbers.retain(|n| n != account_number);
        self.account_numbers.len() != before
    }

    pub fn owns_account(&self, account_number: &str) -> bool {
        self.account_numbers.iter().any(|n| n == account_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("USER_1", "alice", "hash", "Alice Smith", "alice@example.com")
    }

    #[test]
    fn add_account_refuses_duplicates() {
        let mut user = user();
        assert!(user.add_account("ACC1"));
        assert!(!user.add_account("ACC1"));
        assert_eq!(user.account_numbers(), ["ACC1"]);
    }

    #[test]
    fn remove_account_detaches() {
        let mut user = user();
        user.add_account("ACC1");
        user.add_account("ACC2");
        assert!(user.remove_account("ACC1"));
        assert!(!user.remove_account("ACC1"));
        assert!(user.owns_account("ACC2"));
        assert!(!user.owns_account("ACC1"));
    }
}
