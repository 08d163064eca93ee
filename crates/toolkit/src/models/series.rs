use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One addition of the summation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeriesStep {
    pub step: u64,
    pub added: u64,
    #[schema(value_type = u64)]
    pub running_sum: u128,
}

/// Loop total for `1..=n` alongside its closed-form cross-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SumReport {
    pub n: u64,
    #[schema(value_type = u64)]
    pub total: u128,
    #[schema(value_type = u64)]
    pub formula_total: u128,
    pub verified: bool,
    /// Total with `,` thousands separators
    pub formatted_total: String,
    /// `1 + 2 + ... + n = total`, only for small bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<String>,
    /// Running sums after each addition, only for very small bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<SeriesStep>>,
}
