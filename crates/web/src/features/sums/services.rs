use toolkit::{models::SumReport, services::summation};

/// Sum `1..=n` and cross-check against the closed form
pub fn compute_sum(n: u64) -> SumReport {
    let report = summation::calculate(n);

    if !report.verified {
        tracing::error!(
            n,
            total = %report.total,
            formula_total = %report.formula_total,
            "Loop sum does not match n(n+1)/2"
        );
    }

    report
}
