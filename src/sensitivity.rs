//! One-at-a-time (tornado) sensitivity analysis of NPV
//!
//! Each scalar assumption is scaled down and up by a fixed percentage while
//! every other input stays at baseline, and NPV is recomputed through the
//! full revenue -> cash-flow -> discounting pipeline each time. No partial
//! results are cached; every variant runs from an independent copy of the
//! base assumptions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::assumptions::FinancialAssumptions;
use crate::projection::{calculate_npv, project_cash_flows, project_revenues};

/// Default up/down variation applied to each input (percent)
pub const DEFAULT_VARIATION_PCT: f64 = 20.0;

/// Scalar assumption varied in the tornado analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityInput {
    MonthlyPrice,
    Year1Customers,
    RevenueGrowthPct,
    GrossMarginPct,
    InvestmentAmount,
    DiscountRate,
}

impl SensitivityInput {
    /// All inputs covered by the analysis, in presentation order
    pub const ALL: [SensitivityInput; 6] = [
        SensitivityInput::MonthlyPrice,
        SensitivityInput::Year1Customers,
        SensitivityInput::RevenueGrowthPct,
        SensitivityInput::GrossMarginPct,
        SensitivityInput::InvestmentAmount,
        SensitivityInput::DiscountRate,
    ];

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::MonthlyPrice => "Monthly price",
            Self::Year1Customers => "Year-1 customers",
            Self::RevenueGrowthPct => "Revenue growth %",
            Self::GrossMarginPct => "Gross margin %",
            Self::InvestmentAmount => "Investment amount",
            Self::DiscountRate => "Discount rate",
        }
    }

    /// Copy of `base` with this input scaled by `factor`
    ///
    /// Scaling `DiscountRate` changes the discounting divisor as well as the
    /// input set. That conflation is inherited model behavior and kept
    /// as-is.
    fn scaled(&self, base: &FinancialAssumptions, factor: f64) -> FinancialAssumptions {
        let mut varied = base.clone();
        match self {
            Self::MonthlyPrice => varied.monthly_price *= factor,
            Self::Year1Customers => varied.year1_customers *= factor,
            Self::RevenueGrowthPct => varied.revenue_growth_pct *= factor,
            Self::GrossMarginPct => varied.gross_margin_pct *= factor,
            Self::InvestmentAmount => varied.investment_amount *= factor,
            Self::DiscountRate => varied.discount_rate *= factor,
        }
        varied
    }
}

/// NPV impact of varying one input down and up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub input: SensitivityInput,
    pub base_npv: f64,
    pub low_npv: f64,
    pub high_npv: f64,
    pub low_delta: f64,
    pub high_delta: f64,
    /// `|high_npv - low_npv|`, the bar width on a tornado chart
    pub spread: f64,
}

/// Full tornado analysis: baseline NPV plus one bar per input, widest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub base_npv: f64,
    pub variation_pct: f64,
    pub bars: Vec<TornadoBar>,
}

/// Run the tornado analysis at [`DEFAULT_VARIATION_PCT`]
pub fn generate_sensitivity(assumptions: &FinancialAssumptions) -> SensitivityResult {
    generate_sensitivity_with(assumptions, DEFAULT_VARIATION_PCT)
}

/// Run the tornado analysis with an explicit variation percentage
pub fn generate_sensitivity_with(
    assumptions: &FinancialAssumptions,
    variation_pct: f64,
) -> SensitivityResult {
    let base_npv = npv_of(assumptions);

    let low_factor = 1.0 - variation_pct / 100.0;
    let high_factor = 1.0 + variation_pct / 100.0;

    let mut bars: Vec<TornadoBar> = SensitivityInput::ALL
        .iter()
        .map(|input| {
            let low_npv = npv_of(&input.scaled(assumptions, low_factor));
            let high_npv = npv_of(&input.scaled(assumptions, high_factor));

            TornadoBar {
                input: *input,
                base_npv,
                low_npv,
                high_npv,
                low_delta: low_npv - base_npv,
                high_delta: high_npv - base_npv,
                spread: (high_npv - low_npv).abs(),
            }
        })
        .collect();

    // Widest bar first (tornado ordering)
    bars.sort_by(|a, b| b.spread.partial_cmp(&a.spread).unwrap_or(Ordering::Equal));

    SensitivityResult {
        base_npv,
        variation_pct,
        bars,
    }
}

/// NPV of one assumption set through the full pipeline
fn npv_of(assumptions: &FinancialAssumptions) -> f64 {
    let revenues = project_revenues(assumptions);
    let flows = project_cash_flows(&revenues, assumptions);
    calculate_npv(&flows, assumptions.discount_rate_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_financials;

    #[test]
    fn test_base_npv_matches_engine() {
        let a = FinancialAssumptions::default();
        let sensitivity = generate_sensitivity(&a);
        let results = compute_financials(&a);

        assert!((sensitivity.base_npv - results.npv).abs() < 1e-6);
        assert_eq!(sensitivity.bars.len(), 6);
        assert_eq!(sensitivity.variation_pct, 20.0);
    }

    #[test]
    fn test_bars_sorted_by_spread() {
        let sensitivity = generate_sensitivity(&FinancialAssumptions::default());

        for pair in sensitivity.bars.windows(2) {
            assert!(
                pair[0].spread >= pair[1].spread,
                "bars must be non-increasing by spread"
            );
        }
    }

    #[test]
    fn test_investment_bar_is_symmetric() {
        // NPV is linear in the undiscounted time-0 investment, so the up and
        // down deltas must mirror each other
        let sensitivity = generate_sensitivity(&FinancialAssumptions::default());
        let bar = sensitivity
            .bars
            .iter()
            .find(|b| b.input == SensitivityInput::InvestmentAmount)
            .unwrap();

        assert!((bar.low_delta + bar.high_delta).abs() < 1e-6);
        // Shrinking the outlay raises NPV
        assert!(bar.low_delta > 0.0);
        assert!(bar.high_delta < 0.0);
    }

    #[test]
    fn test_investment_delta_magnitude() {
        // +/-20% of the 1.8M outlay lands at time 0 undiscounted, so each
        // delta is exactly 360k
        let sensitivity = generate_sensitivity(&FinancialAssumptions::default());
        let bar = sensitivity
            .bars
            .iter()
            .find(|b| b.input == SensitivityInput::InvestmentAmount)
            .unwrap();

        assert!((bar.low_delta - 360_000.0).abs() < 1e-6);
        assert!((bar.spread - 720_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_gross_margin_has_no_npv_effect() {
        // Gross margin is informational; cash flow comes from the margin
        // ramp, so its bar collapses to zero spread
        let sensitivity = generate_sensitivity(&FinancialAssumptions::default());
        let bar = sensitivity
            .bars
            .iter()
            .find(|b| b.input == SensitivityInput::GrossMarginPct)
            .unwrap();

        assert!(bar.spread.abs() < 1e-9);
        // Zero-impact bars sort last
        assert_eq!(sensitivity.bars.last().unwrap().input, SensitivityInput::GrossMarginPct);
    }

    #[test]
    fn test_base_assumptions_not_mutated() {
        let a = FinancialAssumptions::default();
        let before = a.clone();
        let _ = generate_sensitivity(&a);
        assert_eq!(a, before);
    }

    #[test]
    fn test_discount_rate_variation_moves_npv() {
        // Raising the discount rate must lower NPV for a back-loaded series
        let sensitivity = generate_sensitivity(&FinancialAssumptions::default());
        let bar = sensitivity
            .bars
            .iter()
            .find(|b| b.input == SensitivityInput::DiscountRate)
            .unwrap();

        assert!(bar.high_delta < 0.0);
        assert!(bar.low_delta > 0.0);
    }

    #[test]
    fn test_custom_variation_pct() {
        let a = FinancialAssumptions::default();
        let narrow = generate_sensitivity_with(&a, 10.0);
        let wide = generate_sensitivity_with(&a, 20.0);

        assert_eq!(narrow.variation_pct, 10.0);
        let narrow_bar = narrow
            .bars
            .iter()
            .find(|b| b.input == SensitivityInput::InvestmentAmount)
            .unwrap();
        let wide_bar = wide
            .bars
            .iter()
            .find(|b| b.input == SensitivityInput::InvestmentAmount)
            .unwrap();
        // Linear input: half the variation, half the spread
        assert!((wide_bar.spread - 2.0 * narrow_bar.spread).abs() < 1e-6);
    }
}
