//! MiniBank Store - In-memory ledger store
//!
//! Three independent key-value indexes: users by id, accounts by number,
//! transaction records by account. There is no referential integrity
//! between them - deleting a user does not delete its accounts and vice
//! versa. That is a deliberate property of the data model, not an
//! oversight; callers that need both sides consistent must update both.
//!
//! The store is constructed explicitly and handed to the services that
//! need it. Where a handle must be shared, `SharedStore` wraps the whole
//! store in one serializing lock: the data model assumes at most one
//! in-flight mutation, so a single coarse lock is the honest choice.

pub mod accounts;
pub mod error;
pub mod transactions;
pub mod users;

pub use accounts::AccountRepository;
pub use error::StoreError;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use std::sync::{Arc, Mutex};

/// The three indexes bundled together.
#[derive(Debug, Default)]
pub struct LedgerStore {
    pub users: UserRepository,
    pub accounts: AccountRepository,
    pub transactions: TransactionRepository,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store in a shared, lockable handle.
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Empty every index. Useful for tests and for a full reset.
    pub fn clear_all(&mut self) {
        self.users.clear();
        self.accounts.clear();
        self.transactions.clear();
    }
}

/// Shared handle to the store, one serializing lock around all indexes.
pub type SharedStore = Arc<Mutex<LedgerStore>>;

#[cfg(test)]
mod tests {
    use super::*;
    use minibank_ledger::{Account, User};
    use rust_decimal_macros::dec;

    #[test]
    fn clear_all_empties_every_index() {
        let mut store = LedgerStore::new();
        store
            .users
            .save(User::new("USER_1", "alice", "h", "Alice", "a@example.com"))
            .unwrap();
        store
            .accounts
            .save(Account::new_checking("ACC1", dec!(10), dec!(0)))
            .unwrap();

        store.clear_all();
        assert_eq!(store.users.count(), 0);
        assert_eq!(store.accounts.count(), 0);
        assert_eq!(store.transactions.total_count(), 0);
    }
}
