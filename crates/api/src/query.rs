//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// The `?feeType=` filter used by list, reset, report and backup endpoints.
///
/// An absent parameter is the empty tag, which only matches untagged rows.
#[derive(Debug, Deserialize)]
pub struct FeeTypeParams {
    #[serde(rename = "feeType", default)]
    pub fee_type: String,
}
