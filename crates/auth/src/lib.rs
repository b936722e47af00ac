//! MiniBank Auth - identity layer
//!
//! Registration and login over the user index. The rest of the system
//! treats everything produced here - password hashes, user ids - as
//! opaque strings; only this crate knows how they are made.

pub mod error;
pub mod password;
pub mod service;
pub mod validate;

pub use error::AuthError;
pub use service::AuthService;
