//! Filter criteria: a set of optional predicates over [`PropertyRecord`].
//!
//! Every field is optional and an absent field imposes no constraint, so
//! `FilterCriteria::default()` matches every record. Populated fields are
//! combined with AND.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::PropertyRecord;
use crate::enums::{City, PropertyType};
use crate::errors::ValidationError;

/// Inclusive price bounds, either side open.
///
/// The constructor enforces `min <= max` when both are present, so a
/// `PriceRange` in hand is always satisfiable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: Option<u64>,
    max: Option<u64>,
}

/// Wire shape of [`PriceRange`] before the bounds are checked.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
struct RawPriceRange {
    #[serde(default)]
    min: Option<u64>,
    #[serde(default)]
    max: Option<u64>,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = ValidationError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl PriceRange {
    /// A range with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Build a range from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedRange`] if both bounds are present
    /// and `min > max`.
    pub const fn new(min: Option<u64>, max: Option<u64>) -> Result<Self, ValidationError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ValidationError::InvertedRange { min, max });
            }
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> Option<u64> {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Option<u64> {
        self.max
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub const fn contains(&self, price: u64) -> bool {
        let above_min = match self.min {
            Some(min) => price >= min,
            None => true,
        };
        let below_max = match self.max {
            Some(max) => price <= max,
            None => true,
        };
        above_min && below_max
    }
}

/// Criteria for [`crate::query::filter`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterCriteria {
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default, rename = "type")]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
}

impl FilterCriteria {
    /// Criteria that match every record.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            price: PriceRange::unbounded(),
            city: None,
            property_type: None,
            bedrooms: None,
            bathrooms: None,
        }
    }

    #[must_use]
    pub const fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub const fn with_city(mut self, city: Option<City>) -> Self {
        self.city = city;
        self
    }

    #[must_use]
    pub const fn with_property_type(mut self, property_type: Option<PropertyType>) -> Self {
        self.property_type = property_type;
        self
    }

    /// Exact bedroom count, not a minimum.
    #[must_use]
    pub const fn with_bedrooms(mut self, bedrooms: Option<u32>) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    /// Exact bathroom count, not a minimum.
    #[must_use]
    pub const fn with_bathrooms(mut self, bathrooms: Option<u32>) -> Self {
        self.bathrooms = bathrooms;
        self
    }

    /// True when no field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.price.is_unbounded()
            && self.city.is_none()
            && self.property_type.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
    }

    /// Whether `record` satisfies every populated field.
    #[must_use]
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.price.contains(record.price)
            && self.city.is_none_or(|city| city == record.city)
            && self
                .property_type
                .is_none_or(|kind| kind == record.property_type)
            && self.bedrooms.is_none_or(|count| count == record.bedrooms)
            && self.bathrooms.is_none_or(|count| count == record.bathrooms)
    }
}
