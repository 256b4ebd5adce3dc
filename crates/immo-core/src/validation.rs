//! Validating parsers for raw user input.
//!
//! Each function turns one line of text into a typed value, `None` for an
//! optional field left empty, or a [`ValidationError`] whose message is shown
//! before asking again. The retry loop itself lives in the CLI; nothing here
//! reads from a terminal.

use crate::criteria::PriceRange;
use crate::enums::{City, PropertyType};
use crate::errors::ValidationError;

/// Separator used by the text record store; never allowed inside a field.
const FIELD_DELIMITER: char = ',';

/// Whether an empty input is acceptable for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optionality {
    Required,
    Optional,
}

impl Optionality {
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Optional)
    }
}

/// Parse a whole number strictly greater than zero.
///
/// # Errors
///
/// [`ValidationError::NotANumber`] for non-numeric input,
/// [`ValidationError::NotPositive`] for zero or negatives, and
/// [`ValidationError::MissingValue`] for empty input on a required field.
pub fn parse_positive_int(
    raw: &str,
    optionality: Optionality,
) -> Result<Option<u32>, ValidationError> {
    let Some(trimmed) = non_empty(raw, optionality)? else {
        return Ok(None);
    };
    let value = parse_signed(trimmed)?;
    if value <= 0 {
        return Err(ValidationError::NotPositive { value });
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| ValidationError::NotANumber {
            value: trimmed.to_string(),
        })
}

/// Parse the asking price of a new record: a required positive whole number.
///
/// # Errors
///
/// Same as [`parse_positive_int`] with a required field.
pub fn parse_price(raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingValue);
    }
    let value = parse_signed(trimmed)?;
    if value <= 0 {
        return Err(ValidationError::NotPositive { value });
    }
    u64::try_from(value).map_err(|_| ValidationError::NotANumber {
        value: trimmed.to_string(),
    })
}

/// Parse a city name, case-insensitively.
///
/// # Errors
///
/// [`ValidationError::UnknownCity`] if the value is not one of the supported
/// cities, [`ValidationError::MissingValue`] if empty on a required field.
pub fn parse_city(raw: &str, optionality: Optionality) -> Result<Option<City>, ValidationError> {
    let Some(trimmed) = non_empty(raw, optionality)? else {
        return Ok(None);
    };
    City::from_input(trimmed)
        .map(Some)
        .ok_or_else(|| ValidationError::UnknownCity {
            value: trimmed.to_string(),
        })
}

/// Parse a property type, case-insensitively.
///
/// # Errors
///
/// [`ValidationError::UnknownPropertyType`] if the value is not supported,
/// [`ValidationError::MissingValue`] if empty on a required field.
pub fn parse_property_type(
    raw: &str,
    optionality: Optionality,
) -> Result<Option<PropertyType>, ValidationError> {
    let Some(trimmed) = non_empty(raw, optionality)? else {
        return Ok(None);
    };
    PropertyType::from_input(trimmed)
        .map(Some)
        .ok_or_else(|| ValidationError::UnknownPropertyType {
            value: trimmed.to_string(),
        })
}

/// Parse one side of a price range. Empty input means "no bound".
///
/// # Errors
///
/// [`ValidationError::NotANumber`] unless the input is a non-negative whole
/// number.
pub fn parse_price_bound(raw: &str) -> Result<Option<u64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ValidationError::NotANumber {
            value: trimmed.to_string(),
        })
}

/// Check a pair of already-parsed bounds.
///
/// Either bound may be given alone. Both may be absent only for an optional
/// range.
///
/// # Errors
///
/// [`ValidationError::InvertedRange`] when `min > max`, and
/// [`ValidationError::MissingValue`] when a required range has no bound.
pub fn validate_range(
    min: Option<u64>,
    max: Option<u64>,
    optionality: Optionality,
) -> Result<PriceRange, ValidationError> {
    if min.is_none() && max.is_none() && !optionality.is_optional() {
        return Err(ValidationError::MissingValue);
    }
    PriceRange::new(min, max)
}

/// Parse and check a price range from its two raw inputs. Any failure
/// rejects the pair as a whole.
///
/// # Errors
///
/// See [`parse_price_bound`] and [`validate_range`].
pub fn parse_price_range(
    raw_min: &str,
    raw_max: &str,
    optionality: Optionality,
) -> Result<PriceRange, ValidationError> {
    let min = parse_price_bound(raw_min)?;
    let max = parse_price_bound(raw_max)?;
    validate_range(min, max, optionality)
}

/// Check a username before it is stored.
///
/// # Errors
///
/// [`ValidationError::InvalidUsername`] if the name is empty or contains the
/// record delimiter or a line break.
pub fn parse_username(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidUsername {
            reason: "le nom ne peut pas être vide".to_string(),
        });
    }
    if trimmed.contains(FIELD_DELIMITER) || trimmed.contains(['\n', '\r']) {
        return Err(ValidationError::InvalidUsername {
            reason: format!("le caractère '{FIELD_DELIMITER}' et les sauts de ligne sont interdits"),
        });
    }
    Ok(trimmed.to_string())
}

fn non_empty(raw: &str, optionality: Optionality) -> Result<Option<&str>, ValidationError> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        return Ok(Some(trimmed));
    }
    if optionality.is_optional() {
        Ok(None)
    } else {
        Err(ValidationError::MissingValue)
    }
}

fn parse_signed(trimmed: &str) -> Result<i64, ValidationError> {
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use super::Optionality::{Optional, Required};

    #[rstest]
    #[case("3", Required, Some(3))]
    #[case(" 12 ", Required, Some(12))]
    #[case("1", Optional, Some(1))]
    #[case("", Optional, None)]
    #[case("   ", Optional, None)]
    fn positive_int_accepts(
        #[case] raw: &str,
        #[case] optionality: Optionality,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(parse_positive_int(raw, optionality), Ok(expected));
    }

    #[rstest]
    #[case("0", ValidationError::NotPositive { value: 0 })]
    #[case("-2", ValidationError::NotPositive { value: -2 })]
    #[case("deux", ValidationError::NotANumber { value: "deux".to_string() })]
    #[case("2.5", ValidationError::NotANumber { value: "2.5".to_string() })]
    #[case("", ValidationError::MissingValue)]
    fn positive_int_rejects(#[case] raw: &str, #[case] expected: ValidationError) {
        assert_eq!(parse_positive_int(raw, Required), Err(expected));
    }

    #[test]
    fn optional_positive_int_still_validates_non_empty_input() {
        assert_eq!(
            parse_positive_int("0", Optional),
            Err(ValidationError::NotPositive { value: 0 })
        );
    }

    #[test]
    fn positive_int_rejects_values_beyond_u32() {
        assert!(matches!(
            parse_positive_int("99999999999", Required),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn price_must_be_positive() {
        assert_eq!(parse_price("250000"), Ok(250_000));
        assert_eq!(parse_price("0"), Err(ValidationError::NotPositive { value: 0 }));
        assert_eq!(parse_price(""), Err(ValidationError::MissingValue));
    }

    #[rstest]
    #[case("québec", Optional, Some(City::Quebec))]
    #[case("Toronto", Required, Some(City::Toronto))]
    #[case("", Optional, None)]
    fn city_parsing(
        #[case] raw: &str,
        #[case] optionality: Optionality,
        #[case] expected: Option<City>,
    ) {
        assert_eq!(parse_city(raw, optionality), Ok(expected));
    }

    #[test]
    fn city_rejects_unknown_and_required_empty() {
        assert_eq!(
            parse_city("Paris", Optional),
            Err(ValidationError::UnknownCity {
                value: "Paris".to_string()
            })
        );
        assert_eq!(parse_city("", Required), Err(ValidationError::MissingValue));
    }

    #[test]
    fn property_type_parsing() {
        assert_eq!(
            parse_property_type("loft", Required),
            Ok(Some(PropertyType::Loft))
        );
        assert_eq!(parse_property_type("", Optional), Ok(None));
        assert!(matches!(
            parse_property_type("igloo", Optional),
            Err(ValidationError::UnknownPropertyType { .. })
        ));
    }

    #[test]
    fn validate_range_cases() {
        assert_eq!(
            validate_range(Some(5), Some(3), Optional),
            Err(ValidationError::InvertedRange { min: 5, max: 3 })
        );
        let range = validate_range(Some(3), Some(5), Required).expect("ordered range");
        assert_eq!((range.min(), range.max()), (Some(3), Some(5)));

        assert_eq!(
            validate_range(None, None, Optional),
            Ok(PriceRange::unbounded())
        );
        assert_eq!(
            validate_range(None, None, Required),
            Err(ValidationError::MissingValue)
        );
    }

    #[test]
    fn either_bound_may_be_given_alone() {
        let floor = validate_range(Some(10), None, Required).expect("min only");
        assert_eq!((floor.min(), floor.max()), (Some(10), None));
        let ceiling = parse_price_range("", "300000", Required).expect("max only");
        assert_eq!((ceiling.min(), ceiling.max()), (None, Some(300_000)));
    }

    #[test]
    fn bad_bound_rejects_the_pair() {
        assert!(matches!(
            parse_price_range("abc", "10", Optional),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_price_range("-1", "", Optional),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[rstest]
    #[case("alice", Ok("alice".to_string()))]
    #[case("  bob  ", Ok("bob".to_string()))]
    fn username_accepts(#[case] raw: &str, #[case] expected: Result<String, ValidationError>) {
        assert_eq!(parse_username(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("a,b")]
    #[case("a\nb")]
    fn username_rejects(#[case] raw: &str) {
        assert!(matches!(
            parse_username(raw),
            Err(ValidationError::InvalidUsername { .. })
        ));
    }
}
