//! Entity structs for Solo Immo domain objects.
//!
//! Records are fixed-shape structs rather than open key/value maps, so every
//! field name and type is checked at compile time.

mod credential;
mod property;
mod session;

pub use credential::{CredentialSet, UserCredential};
pub use property::PropertyRecord;
pub use session::Session;
