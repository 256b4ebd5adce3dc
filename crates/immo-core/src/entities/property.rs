use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{City, PropertyType};

/// A property listed for sale.
///
/// Records are never edited in place; the store only supports rewriting the
/// whole collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct PropertyRecord {
    /// Asking price in whole dollars.
    pub price: u64,
    pub city: City,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

impl PropertyRecord {
    #[must_use]
    pub const fn new(
        price: u64,
        city: City,
        property_type: PropertyType,
        bedrooms: u32,
        bathrooms: u32,
    ) -> Self {
        Self {
            price,
            city,
            property_type,
            bedrooms,
            bathrooms,
        }
    }
}
