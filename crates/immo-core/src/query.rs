//! Query engine over an in-memory snapshot of property records.

use crate::criteria::FilterCriteria;
use crate::entities::PropertyRecord;

/// Return the records matching `criteria`, in the order they were given.
///
/// Pure: the input slice is not touched and nothing is re-sorted. A single
/// criterion and a combination of criteria go through the same code; only
/// the number of populated fields differs.
#[must_use]
pub fn filter(records: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .copied()
        .collect()
}
