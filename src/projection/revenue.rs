//! Annual revenue projection with decelerating growth

use crate::assumptions::FinancialAssumptions;

/// Project annual revenues over the assumption horizon
///
/// Year 1 is the seed basis (`monthly_price * year1_customers * 12`). Each
/// subsequent year compounds the nominal growth rate dampened by that year's
/// deceleration multiplier; horizons longer than the deceleration schedule
/// reuse its final entry (steady-state extrapolation).
///
/// Total function: no validation, no side effects. Negative or zero inputs
/// produce degenerate but well-defined output.
pub fn project_revenues(assumptions: &FinancialAssumptions) -> Vec<f64> {
    let years = assumptions.projection_years;
    let mut revenues = Vec::with_capacity(years);

    if years == 0 {
        return revenues;
    }

    let seed = assumptions.monthly_price * assumptions.year1_customers * 12.0;
    revenues.push(seed);

    let nominal_growth = assumptions.revenue_growth_pct / 100.0;
    for year in 1..years {
        let deceleration = assumptions.growth_deceleration.at(year - 1);
        let prior = revenues[year - 1];
        revenues.push(prior * (1.0 + nominal_growth * deceleration));
    }

    revenues
}
