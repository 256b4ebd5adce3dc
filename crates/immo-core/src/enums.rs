//! Closed value sets for property records.
//!
//! Storage and display always use the canonical French spelling
//! (`Québec`, `Montréal`, ...). User input goes through [`City::from_input`]
//! and [`PropertyType::from_input`], which accept any casing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// City a property is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum City {
    #[serde(rename = "Québec")]
    Quebec,
    #[serde(rename = "Montréal")]
    Montreal,
    Toronto,
    Ottawa,
}

impl City {
    /// Every supported city, in menu order.
    pub const ALL: [Self; 4] = [Self::Quebec, Self::Montreal, Self::Toronto, Self::Ottawa];

    /// Canonical spelling used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quebec => "Québec",
            Self::Montreal => "Montréal",
            Self::Toronto => "Toronto",
            Self::Ottawa => "Ottawa",
        }
    }

    /// Match free-form user input against the canonical set, ignoring case
    /// and surrounding whitespace.
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        match_canonical(raw, &Self::ALL, |city| city.as_str())
    }

    /// Comma-separated list of canonical names, for prompts and error messages.
    #[must_use]
    pub fn choices() -> String {
        join_choices(&Self::ALL, |city| city.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = ValidationError;

    /// Strict parse of the canonical spelling (storage format).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCity {
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// PropertyType
// ---------------------------------------------------------------------------

/// Kind of dwelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PropertyType {
    Maison,
    Appartement,
    Condo,
    Loft,
}

impl PropertyType {
    /// Every supported property type, in menu order.
    pub const ALL: [Self; 4] = [Self::Maison, Self::Appartement, Self::Condo, Self::Loft];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maison => "Maison",
            Self::Appartement => "Appartement",
            Self::Condo => "Condo",
            Self::Loft => "Loft",
        }
    }

    /// Match free-form user input against the canonical set, ignoring case
    /// and surrounding whitespace.
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        match_canonical(raw, &Self::ALL, |kind| kind.as_str())
    }

    #[must_use]
    pub fn choices() -> String {
        join_choices(&Self::ALL, |kind| kind.as_str())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPropertyType {
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn match_canonical<T: Copy>(raw: &str, all: &[T], name: impl Fn(T) -> &'static str) -> Option<T> {
    let wanted = raw.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    all.iter()
        .copied()
        .find(|candidate| name(*candidate).to_lowercase() == wanted)
}

fn join_choices<T: Copy>(all: &[T], name: impl Fn(T) -> &'static str) -> String {
    all.iter()
        .map(|item| name(*item))
        .collect::<Vec<_>>()
        .join(", ")
}
