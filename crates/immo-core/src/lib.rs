//! # immo-core
//!
//! Core types and pure logic for Solo Immo, a terminal real-estate listing
//! manager.
//!
//! - Entity structs (`PropertyRecord`, `UserCredential`, `Session`)
//! - Closed value sets for cities and property types
//! - `FilterCriteria` and the query engine
//! - Validating parsers for raw user input
//! - The authorization gate deciding what a session may do
//!
//! Nothing in this crate performs I/O.

pub mod criteria;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod gate;
pub mod money;
pub mod query;
pub mod responses;
pub mod validation;

pub use criteria::{FilterCriteria, PriceRange};
pub use entities::{CredentialSet, PropertyRecord, Session, UserCredential};
pub use enums::{City, PropertyType};
pub use errors::{AccessDenied, DuplicateAccount, ValidationError};
pub use gate::{Action, ListingOutcome, NO_PROPERTIES_MESSAGE};

/// JSON schema describing a stored property record.
#[must_use]
pub fn property_schema() -> serde_json::Value {
    schemars::schema_for!(PropertyRecord).to_value()
}
