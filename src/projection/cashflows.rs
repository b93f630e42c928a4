//! Cash-flow series construction and projection output structures

use serde::{Deserialize, Serialize};

use crate::assumptions::FinancialAssumptions;

/// Build the signed annual cash-flow series from projected revenues
///
/// Index 0 carries the upfront investment with negative sign; index `i >= 1`
/// is year `i` revenue times that year's net-margin multiplier. Horizons
/// longer than the margin ramp reuse its final entry (steady-state
/// extrapolation, same policy as the growth deceleration).
///
/// The output is always one element longer than `revenues`.
pub fn project_cash_flows(revenues: &[f64], assumptions: &FinancialAssumptions) -> Vec<f64> {
    let mut flows = Vec::with_capacity(revenues.len() + 1);
    flows.push(-assumptions.investment_amount);

    for (year, &revenue) in revenues.iter().enumerate() {
        flows.push(revenue * assumptions.margin_ramp.at(year));
    }

    flows
}

/// Running sum of a cash-flow series, same length as the input
pub fn cumulative_cash_flows(flows: &[f64]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(flows.len());
    let mut running = 0.0;
    for &flow in flows {
        running += flow;
        cumulative.push(running);
    }
    cumulative
}

/// Complete output of one engine invocation
///
/// Derived entirely from the assumptions that produced it; carries no
/// identity and no shared state. `irr` and `payback_months` are `None` when
/// the corresponding metric is not computable from the cash flows, which is
/// a legitimate business outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialResults {
    /// Projected revenue per year, length = `projection_years`
    pub annual_revenues: Vec<f64>,

    /// Signed cash flows, length = `projection_years + 1` (index 0 is the
    /// negative investment)
    pub cash_flows: Vec<f64>,

    /// Prefix sums of `cash_flows`, same length
    pub cumulative_cash_flows: Vec<f64>,

    /// Net present value at the assumed discount rate
    pub npv: f64,

    /// Internal rate of return as a decimal, when one exists
    pub irr: Option<f64>,

    /// Payback period in whole months, when the investment is recovered
    /// within the horizon
    pub payback_months: Option<f64>,

    /// Seed monthly revenue (`monthly_price * year1_customers`)
    pub monthly_revenue: f64,

    /// Year-1 annual revenue
    pub annual_revenue: f64,

    /// Total revenue across the full horizon
    pub total_revenue_5yr: f64,

    /// Steady-state net margin within the horizon, as a percentage
    pub contribution_margin: f64,
}

impl FinancialResults {
    /// Total net cash generated over the horizon (final cumulative entry)
    pub fn total_net_cash(&self) -> f64 {
        self.cumulative_cash_flows.last().copied().unwrap_or(0.0)
    }
}
