//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in account operations.
///
/// Every failure leaves the account untouched: no balance change, no
/// record appended.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be positive: {0}")]
    NonPositiveAmount(Decimal),

    #[error("Withdrawal not permitted on account {account}")]
    WithdrawalNotAllowed { account: String },

    #[error("Account {0} is not a savings account")]
    NotASavingsAccount(String),
}
