use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Largest bound accepted by the sum tool.
pub const MAX_BOUND: u64 = 10_000;

/// Request payload for summing `1..=n`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ComputeSumRequest {
    #[validate(range(min = 1, max = MAX_BOUND, message = "n must be between 1 and 10000"))]
    pub n: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_validation() {
        assert!(ComputeSumRequest { n: 1 }.validate().is_ok());
        assert!(ComputeSumRequest { n: MAX_BOUND }.validate().is_ok());
        assert!(ComputeSumRequest { n: 0 }.validate().is_err());
        assert!(ComputeSumRequest { n: MAX_BOUND + 1 }.validate().is_err());
    }
}
