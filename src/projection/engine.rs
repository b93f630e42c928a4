//! Facade combining projection, discounting, and derived metrics

use crate::assumptions::FinancialAssumptions;

use super::cashflows::{cumulative_cash_flows, project_cash_flows, FinancialResults};
use super::irr::calculate_irr;
use super::npv::calculate_npv;
use super::payback::calculate_payback;
use super::revenue::project_revenues;

/// Run the full pipeline: revenues, cash flows, NPV, IRR, payback, and the
/// aggregate figures the dashboard displays
///
/// Pure function of its input. Every call allocates fresh series and returns
/// independently; reentrant callers need no coordination.
pub fn compute_financials(assumptions: &FinancialAssumptions) -> FinancialResults {
    let annual_revenues = project_revenues(assumptions);
    let cash_flows = project_cash_flows(&annual_revenues, assumptions);
    let cumulative = cumulative_cash_flows(&cash_flows);

    let npv = calculate_npv(&cash_flows, assumptions.discount_rate_decimal());
    let irr = calculate_irr(&cash_flows);
    let payback_months = calculate_payback(&cash_flows);

    let annual_revenue = annual_revenues.first().copied().unwrap_or(0.0);
    let total_revenue_5yr = annual_revenues.iter().sum();

    FinancialResults {
        npv,
        irr,
        payback_months,
        monthly_revenue: assumptions.monthly_price * assumptions.year1_customers,
        annual_revenue,
        total_revenue_5yr,
        contribution_margin: assumptions.contribution_margin_pct(),
        annual_revenues,
        cash_flows,
        cumulative_cash_flows: cumulative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_end_to_end_default_case() {
        let a = FinancialAssumptions::default();
        let results = compute_financials(&a);

        assert_eq!(results.annual_revenues.len(), 5);
        assert_eq!(results.cash_flows.len(), 6);
        assert_eq!(results.cumulative_cash_flows.len(), 6);

        assert_relative_eq!(results.annual_revenues[0], 630_000.0, epsilon = 1e-6);
        assert_relative_eq!(results.cash_flows[0], -1_800_000.0, epsilon = 1e-6);
        assert_relative_eq!(results.contribution_margin, 65.0, epsilon = 1e-12);

        assert_relative_eq!(results.monthly_revenue, 52_500.0, epsilon = 1e-9);
        assert_relative_eq!(results.annual_revenue, 630_000.0, epsilon = 1e-6);

        let total: f64 = results.annual_revenues.iter().sum();
        assert_relative_eq!(results.total_revenue_5yr, total, epsilon = 1e-6);
    }

    #[test]
    fn test_length_invariant_across_horizons() {
        for years in 1..=10 {
            let a = FinancialAssumptions {
                projection_years: years,
                ..FinancialAssumptions::default()
            };
            let results = compute_financials(&a);

            assert_eq!(results.annual_revenues.len(), years);
            assert_eq!(results.cash_flows.len(), years + 1);
            assert_eq!(results.cumulative_cash_flows.len(), years + 1);
            assert_relative_eq!(
                results.cash_flows[0],
                -a.investment_amount,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_cumulative_matches_cash_flows() {
        let results = compute_financials(&FinancialAssumptions::default());

        let mut running = 0.0;
        for (i, &flow) in results.cash_flows.iter().enumerate() {
            running += flow;
            assert_relative_eq!(results.cumulative_cash_flows[i], running, epsilon = 1e-6);
        }
        assert_relative_eq!(
            results.total_net_cash(),
            running,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_npv_consistent_with_primitive() {
        let a = FinancialAssumptions::default();
        let results = compute_financials(&a);
        let expected = super::calculate_npv(&results.cash_flows, 0.10);
        assert_relative_eq!(results.npv, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_metrics_absent_when_not_computable() {
        // All-positive flows: zero investment, immediate inflows
        let a = FinancialAssumptions {
            investment_amount: 0.0,
            ..FinancialAssumptions::default()
        };
        let results = compute_financials(&a);
        assert!(results.irr.is_none());

        // Massive investment never recovered within the horizon
        let a = FinancialAssumptions {
            investment_amount: 1e12,
            ..FinancialAssumptions::default()
        };
        let results = compute_financials(&a);
        assert!(results.payback_months.is_none());
    }

    #[test]
    fn test_calls_are_independent() {
        let a = FinancialAssumptions::default();
        let first = compute_financials(&a);
        let second = compute_financials(&a);
        assert_eq!(first, second);
    }
}
