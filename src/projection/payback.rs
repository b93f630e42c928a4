//! Payback period: when cumulative cash flow first turns non-negative

use super::cashflows::cumulative_cash_flows;

/// Payback period in months, rounded to the nearest whole month
///
/// Scans the cumulative series for the first year `i >= 1` at which it is
/// non-negative, then interpolates linearly within that year: the fraction
/// of the year needed is the outstanding deficit divided by that year's
/// inflow. Returns `None` when cumulative cash never reaches zero within
/// the horizon, or when the crossing year has a non-positive flow (a
/// degenerate series with no true crossing). "Never pays back" is a valid
/// business answer, not an error.
pub fn calculate_payback(flows: &[f64]) -> Option<f64> {
    let cumulative = cumulative_cash_flows(flows);

    for i in 1..cumulative.len() {
        if cumulative[i] >= 0.0 {
            if flows[i] <= 0.0 {
                return None;
            }
            let fraction_of_year = cumulative[i - 1].abs() / flows[i];
            let payback_years = (i - 1) as f64 + fraction_of_year;
            return Some((payback_years * 12.0).round());
        }
    }

    None
}
