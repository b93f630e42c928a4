//! Business assumptions driving the financial projection
//!
//! All inputs to the engine live here: the seed revenue basis, growth and
//! margin schedules, the upfront investment, and the discount rate. The
//! engine treats a `FinancialAssumptions` value as immutable for the
//! duration of a computation.

use serde::{Deserialize, Serialize};

/// Default monthly price per customer
pub const DEFAULT_MONTHLY_PRICE: f64 = 3_500.0;

/// Default number of customers in year 1
pub const DEFAULT_YEAR1_CUSTOMERS: f64 = 15.0;

/// Default nominal year-over-year revenue growth (percent)
pub const DEFAULT_REVENUE_GROWTH_PCT: f64 = 85.0;

/// Default gross margin (percent, informational)
pub const DEFAULT_GROSS_MARGIN_PCT: f64 = 78.0;

/// Default upfront investment
pub const DEFAULT_INVESTMENT_AMOUNT: f64 = 1_800_000.0;

/// Default discount rate for NPV (percent)
pub const DEFAULT_DISCOUNT_RATE: f64 = 10.0;

/// Default projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: usize = 5;

/// Default net-margin ramp by projection year
pub const DEFAULT_MARGIN_RAMP: [f64; 5] = [0.15, 0.35, 0.52, 0.60, 0.65];

/// Default growth deceleration multipliers applied after year 1
pub const DEFAULT_GROWTH_DECELERATION: [f64; 4] = [1.0, 0.7, 0.5, 0.35];

/// Per-year schedule of multipliers with steady-state extrapolation
///
/// Indexing beyond the last entry returns the last entry rather than
/// failing. Short schedules (margin maturing in 3 years, growth flattening
/// in 4) thereby apply cleanly to any projection horizon. Both the margin
/// ramp and the growth deceleration use this policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearSchedule {
    values: Vec<f64>,
}

impl YearSchedule {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Value for a zero-based year index, clamped to the final entry
    /// (steady-state extrapolation). An empty schedule yields 0.0.
    pub fn at(&self, year_index: usize) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let idx = year_index.min(self.values.len() - 1);
        self.values[idx]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for YearSchedule {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for YearSchedule {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Complete set of assumptions for one projection run
///
/// The engine performs no range validation: zero or negative seed values
/// produce degenerate but well-defined output. Business-plausibility checks
/// belong to the calling layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAssumptions {
    /// Monthly price per customer
    pub monthly_price: f64,

    /// Customer count in year 1
    pub year1_customers: f64,

    /// Nominal year-over-year revenue growth (percent, 85.0 = 85%)
    pub revenue_growth_pct: f64,

    /// Gross margin (percent). Informational only; realized margin comes
    /// from `margin_ramp`.
    pub gross_margin_pct: f64,

    /// Upfront investment, recorded as a negative cash flow at time 0
    pub investment_amount: f64,

    /// Discount rate for NPV (percent)
    pub discount_rate: f64,

    /// Projection horizon in years (>= 1 for meaningful output)
    pub projection_years: usize,

    /// Net-margin multiplier per projection year
    pub margin_ramp: YearSchedule,

    /// Growth dampener per year after year 1
    pub growth_deceleration: YearSchedule,
}

impl Default for FinancialAssumptions {
    fn default() -> Self {
        Self {
            monthly_price: DEFAULT_MONTHLY_PRICE,
            year1_customers: DEFAULT_YEAR1_CUSTOMERS,
            revenue_growth_pct: DEFAULT_REVENUE_GROWTH_PCT,
            gross_margin_pct: DEFAULT_GROSS_MARGIN_PCT,
            investment_amount: DEFAULT_INVESTMENT_AMOUNT,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            projection_years: DEFAULT_PROJECTION_YEARS,
            margin_ramp: YearSchedule::new(DEFAULT_MARGIN_RAMP.to_vec()),
            growth_deceleration: YearSchedule::new(DEFAULT_GROWTH_DECELERATION.to_vec()),
        }
    }
}

impl FinancialAssumptions {
    /// Discount rate as a decimal (10.0% -> 0.10)
    pub fn discount_rate_decimal(&self) -> f64 {
        self.discount_rate / 100.0
    }

    /// Steady-state net margin within the horizon, as a percentage
    ///
    /// Reads the last applicable ramp entry for the final projection year.
    pub fn contribution_margin_pct(&self) -> f64 {
        let last_year = self.projection_years.saturating_sub(1);
        self.margin_ramp.at(last_year) * 100.0
    }
}
