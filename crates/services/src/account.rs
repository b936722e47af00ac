//! Account lifecycle - opening, lookup, closing

use minibank_core::ids;
use minibank_ledger::{Account, AccountType};
use minibank_store::SharedStore;
use rust_decimal::Decimal;

use crate::error::ServiceError;

/// Opens, resolves and closes accounts.
pub struct AccountService {
    store: SharedStore,
}

impl AccountService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Open a checking account for a user.
    ///
    /// Rejects a negative initial balance or overdraft limit. The account
    /// is saved to the account index and attached to the user in one
    /// locked step; if the attach cannot complete, the saved account is
    /// removed again so no half-created account stays visible.
    pub fn open_checking(
        &self,
        user_id: &str,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Result<Account, ServiceError> {
        if initial_balance < Decimal::ZERO {
            return Err(ServiceError::InvalidInitialBalance(initial_balance));
        }
        if overdraft_limit < Decimal::ZERO {
            return Err(ServiceError::InvalidOverdraftLimit(overdraft_limit));
        }
        let account = Account::new_checking(ids::account_number(), initial_balance, overdraft_limit);
        self.open(user_id, account)
    }

    /// Open a savings account for a user.
    ///
    /// Rejects a negative initial balance and a rate outside `0..=1`.
    pub fn open_savings(
        &self,
        user_id: &str,
        initial_balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Account, ServiceError> {
        if initial_balance < Decimal::ZERO {
            return Err(ServiceError::InvalidInitialBalance(initial_balance));
        }
        if interest_rate < Decimal::ZERO || interest_rate > Decimal::ONE {
            return Err(ServiceError::InvalidInterestRate(interest_rate));
        }
        let account = Account::new_savings(ids::account_number(), initial_balance, interest_rate);
        self.open(user_id, account)
    }

    fn open(&self, user_id: &str, account: Account) -> Result<Account, ServiceError> {
        let mut store = self.store.lock().expect("store lock poisoned");
        let mut user = store
            .users
            .find_by_id(user_id)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownUser(user_id.to_owned()))?;

        let number = account.number().to_owned();
        store.accounts.save(account.clone())?;

        if !user.add_account(&number) {
            // Roll the save back; a fresh number colliding with one the
            // user already owns means the generator misbehaved.
            let _ = store.accounts.delete(&number);
            return Err(ServiceError::AttachFailed {
                account: number,
                user: user_id.to_owned(),
            });
        }
        if let Err(e) = store.users.update(user) {
            let _ = store.accounts.delete(&number);
            return Err(e.into());
        }

        tracing::debug!(
            account = %number,
            user = user_id,
            kind = %account.account_type(),
            "opened account"
        );
        Ok(account)
    }

    pub fn account(&self, account_number: &str) -> Option<Account> {
        let store = self.store.lock().expect("store lock poisoned");
        store.accounts.find_by_number(account_number).cloned()
    }

    pub fn account_exists(&self, account_number: &str) -> bool {
        let store = self.store.lock().expect("store lock poisoned");
        store.accounts.exists(account_number)
    }

    pub fn balance(&self, account_number: &str) -> Option<Decimal> {
        self.account(account_number).map(|a| a.balance())
    }

    pub fn account_type(&self, account_number: &str) -> Option<AccountType> {
        self.account(account_number).map(|a| a.account_type())
    }

    /// Close an account: look up, flip to inactive, write back.
    pub fn close_account(&self, account_number: &str) -> Result<(), ServiceError> {
        let mut store = self.store.lock().expect("store lock poisoned");
        let mut account = store
            .accounts
            .find_by_number(account_number)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownAccount(account_number.to_owned()))?;
        account.close();
        store.accounts.update(account)?;
        tracing::debug!(account = account_number, "closed account");
        Ok(())
    }

    /// All accounts attached to a user, in attachment order. Numbers that
    /// no longer resolve (the account was deleted independently) are
    /// skipped.
    pub fn accounts_for_user(&self, user_id: &str) -> Result<Vec<Account>, ServiceError> {
        let store = self.store.lock().expect("store lock poisoned");
        let user = store
            .users
            .find_by_id(user_id)
            .ok_or_else(|| ServiceError::UnknownUser(user_id.to_owned()))?;
        Ok(user
            .account_numbers()
            .iter()
            .filter_map(|n| store.accounts.find_by_number(n))
            .cloned()
            .collect())
    }

    /// The user's accounts of one variant.
    pub fn accounts_of_type(
        &self,
        user_id: &str,
        account_type: AccountType,
    ) -> Result<Vec<Account>, ServiceError> {
        Ok(self
            .accounts_for_user(user_id)?
            .into_iter()
            .filter(|a| a.account_type() == account_type)
            .collect())
    }

    /// Aggregate balance across all of the user's accounts.
    pub fn total_balance(&self, user_id: &str) -> Result<Decimal, ServiceError> {
        Ok(self
            .accounts_for_user(user_id)?
            .iter()
            .map(|a| a.balance())
            .sum())
    }
}
