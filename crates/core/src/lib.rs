//! MiniBank Core - Shared domain primitives
//!
//! This crate contains the types every other MiniBank crate builds on:
//! - `Amount`: Non-negative decimal magnitude of a ledger entry
//! - `ids`: Opaque identifier generation for users, accounts, transactions

pub mod amount;
pub mod ids;

pub use amount::{Amount, AmountError};
