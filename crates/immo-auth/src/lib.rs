//! # immo-auth
//!
//! Account lifecycle for Solo Immo: password digests, registration, sign-in
//! and sign-out against the abstract stores from `immo-store`.
//!
//! Passwords are stored as SHA-256 hex digests and compared in constant time.
//! A failed sign-in never reveals whether the username exists.

pub mod accounts;
pub mod credential;
pub mod error;

pub use accounts::{current_session, login, logout, register};
pub use error::AuthError;
