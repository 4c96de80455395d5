//! Family-makeup column resolution and premium averaging.

use crate::models::{DataCell, FamilyMakeup, PremiumColumn, PremiumSet};

/// Resolve a listing family-makeup key to the premium columns averaged for it.
///
/// Missing, empty or unrecognized keys mean no premium data was requested and
/// resolve to an empty slice.
pub fn premium_columns_for(family_makeup: Option<&str>) -> &'static [PremiumColumn] {
    family_makeup
        .and_then(FamilyMakeup::from_key)
        .map(FamilyMakeup::listing_columns)
        .unwrap_or(&[])
}

/// Mean of the valid figures stored in `columns`.
///
/// Absent cells, text that does not parse as a number and non-finite values
/// are skipped. Returns `None` when nothing valid remains, never `0`.
pub fn average_premium(premiums: &PremiumSet, columns: &[PremiumColumn]) -> Option<f64> {
    let values: Vec<f64> = columns
        .iter()
        .filter_map(|column| premiums.get(*column).and_then(DataCell::as_amount))
        .collect();

    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
#[path = "premium_tests.rs"]
mod premium_tests;
