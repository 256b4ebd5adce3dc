//! Response types returned as JSON by `immo` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::criteria::FilterCriteria;
use crate::entities::PropertyRecord;

/// Response from `immo property list` and `immo property filter`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListingResponse {
    pub authorized: bool,
    pub criteria: FilterCriteria,
    pub total: usize,
    pub properties: Vec<PropertyRecord>,
    pub message: Option<String>,
}

/// Response from `immo property add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PropertyAddResponse {
    pub added: bool,
    pub property: Option<PropertyRecord>,
    pub message: String,
}

/// Response from the `immo auth` commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthResponse {
    pub authenticated: bool,
    pub user: Option<String>,
    pub message: String,
}
