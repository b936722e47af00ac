//! Bank facade wiring one store to all services

use minibank_auth::AuthService;
use minibank_store::{LedgerStore, SharedStore};

use crate::account::AccountService;
use crate::transaction::TransactionService;

/// Counters over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankStats {
    pub users: usize,
    pub accounts: usize,
    pub transactions: usize,
}

/// One in-memory bank: a shared store and the services built on it.
///
/// All services hold clones of the same `Arc`, so anything registered or
/// opened through one service is immediately visible through the others.
pub struct Bank {
    store: SharedStore,
    auth: AuthService,
    accounts: AccountService,
    transactions: TransactionService,
}

impl Bank {
    pub fn new() -> Self {
        let store = LedgerStore::shared();
        Self {
            auth: AuthService::new(store.clone()),
            accounts: AccountService::new(store.clone()),
            transactions: TransactionService::new(store.clone()),
            store,
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn transactions(&self) -> &TransactionService {
        &self.transactions
    }

    /// Drop every user, account and record.
    pub fn reset(&self) {
        self.store.lock().expect("store lock poisoned").clear_all();
    }

    pub fn stats(&self) -> BankStats {
        let store = self.store.lock().expect("store lock poisoned");
        BankStats {
            users: store.users.count(),
            accounts: store.accounts.count(),
            transactions: store.transactions.total_count(),
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn services_share_one_store() {
        let bank = Bank::new();
        let user = bank
            .auth()
            .register("alice01", "secret1", "Alice Doe", "alice@example.com")
            .unwrap();
        let account = bank
            .accounts()
            .open_checking(user.user_id(), dec!(100), dec!(0))
            .unwrap();
        bank.transactions()
            .deposit(account.number(), dec!(40), "first")
            .unwrap();

        let stats = bank.stats();
        assert_eq!(stats.users, 1);
        assert_eq!(stats.accounts, 1);
        assert_eq!(stats.transactions, 1);
        assert_eq!(bank.accounts().balance(account.number()), Some(dec!(140)));
    }

    #[test]
    fn reset_empties_everything() {
        let bank = Bank::new();
        let user = bank
            .auth()
            .register("alice01", "secret1", "Alice Doe", "alice@example.com")
            .unwrap();
        bank.accounts()
            .open_savings(user.user_id(), dec!(500), dec!(0.025))
            .unwrap();
        bank.reset();
        let stats = bank.stats();
        assert_eq!(stats.users, 0);
        assert_eq!(stats.accounts, 0);
        assert_eq!(stats.transactions, 0);
    }
}
