//! MiniBank Services - orchestration over the ledger store
//!
//! The services resolve accounts through the store, delegate the actual
//! balance mutation to the account, write the mutated account back and
//! mirror every produced record into the transaction index. They are the
//! only place where two accounts are coordinated (transfers), and each
//! operation runs under a single store lock so a failed operation leaves
//! no partial state behind.

pub mod account;
pub mod bank;
pub mod error;
pub mod transaction;

pub use account::AccountService;
pub use bank::{Bank, BankStats};
pub use error::ServiceError;
pub use transaction::TransactionService;
