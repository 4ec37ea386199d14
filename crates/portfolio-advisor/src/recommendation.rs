//! Recommendation Table
//!
//! Maps a risk level to a fixed bond/equity allocation.

use crate::model::RiskLevel;

/// Returned for anything outside the four supported levels
pub const INVALID_RISK_LEVEL: &str = "Invalid Input Please enter either none, low, medium, or high";

/// Allocation text for a risk level (case-insensitive).
///
/// Validation normally rejects unknown levels before fulfillment; if one
/// slips through, the invalid-input text is returned instead of an error.
pub fn recommend(risk_level: &str) -> String {
    risk_level.parse::<RiskLevel>().map_or_else(
        |_| INVALID_RISK_LEVEL.to_owned(),
        |level| level.allocation().to_string(),
    )
}
