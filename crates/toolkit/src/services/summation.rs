use crate::models::{SeriesStep, SumReport};

/// Largest bound that still gets a `1 + 2 + ... + n` breakdown.
pub const BREAKDOWN_LIMIT: u64 = 20;

/// Largest bound that still gets a step-by-step trace.
pub const STEP_TRACE_LIMIT: u64 = 10;

/// Sums `1..=n` one addition at a time.
pub fn accumulated_sum(n: u64) -> u128 {
    let mut total: u128 = 0;
    for i in 1..=n {
        total += u128::from(i);
    }
    total
}

/// `n(n+1)/2`, computed independently of the loop.
pub fn closed_form_sum(n: u64) -> u128 {
    let n = u128::from(n);
    n * (n + 1) / 2
}

/// Running sum after each addition of `1..=n`.
pub fn running_sums(n: u64) -> Vec<SeriesStep> {
    let mut running_sum: u128 = 0;
    (1..=n)
        .map(|i| {
            running_sum += u128::from(i);
            SeriesStep {
                step: i,
                added: i,
                running_sum,
            }
        })
        .collect()
}

/// Loop sum, formula cross-check and the display extras for small bounds.
pub fn calculate(n: u64) -> SumReport {
    let total = accumulated_sum(n);
    let formula_total = closed_form_sum(n);

    let breakdown = (1..=BREAKDOWN_LIMIT).contains(&n).then(|| {
        let terms = (1..=n).map(|i| i.to_string()).collect::<Vec<_>>();
        format!("{} = {}", terms.join(" + "), group_thousands(total))
    });
    let steps = (1..=STEP_TRACE_LIMIT).contains(&n).then(|| running_sums(n));

    SumReport {
        n,
        total,
        formula_total,
        verified: total == formula_total,
        formatted_total: group_thousands(total),
        breakdown,
        steps,
    }
}

/// Renders `value` with `,` between groups of three digits.
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }

    result
}
