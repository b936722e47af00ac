//! Account index - account number to account

use minibank_ledger::Account;
use std::collections::HashMap;

use crate::error::StoreError;

/// Accounts keyed by account number.
#[derive(Debug, Default)]
pub struct AccountRepository {
    accounts: HashMap<String, Account>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account. Fails if the number is already taken,
    /// leaving the stored account untouched.
    pub fn save(&mut self, account: Account) -> Result<(), StoreError> {
        if self.accounts.contains_key(account.number()) {
            return Err(StoreError::DuplicateAccount(account.number().to_owned()));
        }
        self.accounts.insert(account.number().to_owned(), account);
        Ok(())
    }

    pub fn find_by_number(&self, account_number: &str) -> Option<&Account> {
        self.accounts.get(account_number)
    }

    /// Replace an existing account. Fails if the number is absent - this
    /// is an update of an existing key, not an upsert.
    pub fn update(&mut self, account: Account) -> Result<(), StoreError> {
        if !self.accounts.contains_key(account.number()) {
            return Err(StoreError::AccountNotFound(account.number().to_owned()));
        }
        self.accounts.insert(account.number().to_owned(), account);
        Ok(())
    }

    pub fn delete(&mut self, account_number: &str) -> Result<(), StoreError> {
        self.accounts
            .remove(account_number)
            .map(|_| ())
            .ok_or_else(|| StoreError::AccountNotFound(account_number.to_owned()))
    }

    pub fn exists(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    pub fn clear(&mut self) {
        self.accounts.clear();
    }
}
