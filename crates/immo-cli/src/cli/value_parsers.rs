//! clap value parsers backed by the core validators, so flags and prompts
//! accept exactly the same input.

use immo_core::validation::{self, Optionality};
use immo_core::{City, PropertyType, ValidationError};

pub fn price_bound(raw: &str) -> Result<u64, ValidationError> {
    validation::parse_price_bound(raw)?.ok_or(ValidationError::MissingValue)
}

pub fn price(raw: &str) -> Result<u64, ValidationError> {
    validation::parse_price(raw)
}

pub fn city(raw: &str) -> Result<City, ValidationError> {
    validation::parse_city(raw, Optionality::Required)?.ok_or(ValidationError::MissingValue)
}

pub fn property_type(raw: &str) -> Result<PropertyType, ValidationError> {
    validation::parse_property_type(raw, Optionality::Required)?
        .ok_or(ValidationError::MissingValue)
}

pub fn room_count(raw: &str) -> Result<u32, ValidationError> {
    validation::parse_positive_int(raw, Optionality::Required)?
        .ok_or(ValidationError::MissingValue)
}
