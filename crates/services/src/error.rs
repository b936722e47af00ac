//! Service errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the account and transaction services.
///
/// Every variant is recoverable and reports a refused operation; none of
/// them leave partial state in the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("User {0} not found")]
    UnknownUser(String),

    #[error("Account {0} not found")]
    UnknownAccount(String),

    #[error("Account {0} is closed")]
    InactiveAccount(String),

    #[error("Initial balance cannot be negative: {0}")]
    InvalidInitialBalance(Decimal),

    #[error("Overdraft limit cannot be negative: {0}")]
    InvalidOverdraftLimit(Decimal),

    #[error("Interest rate must be between 0 and 1: {0}")]
    InvalidInterestRate(Decimal),

    #[error("Insufficient balance on {account}: {balance} available, {requested} requested")]
    InsufficientFunds {
        account: String,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Could not attach account {account} to user {user}")]
    AttachFailed { account: String, user: String },

    #[error(transparent)]
    Ledger(#[from] minibank_ledger::LedgerError),

    #[error(transparent)]
    Store(#[from] minibank_store::StoreError),
}
