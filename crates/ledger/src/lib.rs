//! MiniBank Ledger - Account and transaction domain
//!
//! All balance changes in MiniBank go through this crate.
//!
//! # Key Types
//! - `Account`: Balance owner with a tagged Checking/Savings variant
//! - `TransactionRecord`: Immutable ledger entry appended by its account
//! - `User`: Customer owning a set of account numbers
//!
//! An account records every balance change in its own append-only history,
//! and the invariant `balance == initial + sum of signed record amounts`
//! holds after every operation.

pub mod account;
pub mod error;
pub mod transaction;
pub mod user;

pub use account::{
    Account, AccountKind, AccountType, DEFAULT_SAVINGS_INTEREST_RATE, DEFAULT_WITHDRAWAL_PENALTY,
    MAX_MONTHLY_SAVINGS_WITHDRAWALS, SAVINGS_MINIMUM_BALANCE,
};
pub use error::LedgerError;
pub use transaction::{TransactionKind, TransactionRecord};
pub use user::User;
