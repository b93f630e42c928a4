//! Adapters to and from the external persistence schema
//!
//! The surrounding dashboard stores investment cases with every assumption
//! field optional; the engine works on a fully-populated value. These two
//! conversions are the engine's only coupling to the outside system: a
//! missing field always falls back to the documented default constant,
//! never to zero and never to an error.

use serde::{Deserialize, Serialize};

use crate::assumptions::{FinancialAssumptions, YearSchedule};
use crate::projection::FinancialResults;

/// Assumption record as persisted by the dashboard (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseAssumptions {
    pub monthly_price: Option<f64>,
    pub year1_customers: Option<f64>,
    pub revenue_growth_pct: Option<f64>,
    pub gross_margin_pct: Option<f64>,
    pub investment_amount: Option<f64>,
    pub discount_rate: Option<f64>,
    pub projection_years: Option<usize>,
    pub margin_ramp: Option<Vec<f64>>,
    pub growth_deceleration: Option<Vec<f64>>,
}

/// Computed financials as persisted alongside a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFinancials {
    pub annual_revenues: Vec<f64>,
    pub cash_flows: Vec<f64>,
    pub cumulative_cash_flows: Vec<f64>,
    pub npv: f64,
    /// `null` in storage when no IRR exists
    pub irr: Option<f64>,
    /// `null` in storage when the case never pays back within the horizon
    pub payback_months: Option<f64>,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub total_revenue_5yr: f64,
    pub contribution_margin: f64,
}

/// Fill a complete assumption set from a partial case record
///
/// Every absent field takes its default constant. Callers that pin the
/// horizon (the wizard fixes five years) set `projection_years` explicitly
/// before persisting.
pub fn to_financial_assumptions(case: &CaseAssumptions) -> FinancialAssumptions {
    let defaults = FinancialAssumptions::default();

    FinancialAssumptions {
        monthly_price: case.monthly_price.unwrap_or(defaults.monthly_price),
        year1_customers: case.year1_customers.unwrap_or(defaults.year1_customers),
        revenue_growth_pct: case
            .revenue_growth_pct
            .unwrap_or(defaults.revenue_growth_pct),
        gross_margin_pct: case.gross_margin_pct.unwrap_or(defaults.gross_margin_pct),
        investment_amount: case
            .investment_amount
            .unwrap_or(defaults.investment_amount),
        discount_rate: case.discount_rate.unwrap_or(defaults.discount_rate),
        projection_years: case.projection_years.unwrap_or(defaults.projection_years),
        margin_ramp: case
            .margin_ramp
            .clone()
            .map(YearSchedule::new)
            .unwrap_or(defaults.margin_ramp),
        growth_deceleration: case
            .growth_deceleration
            .clone()
            .map(YearSchedule::new)
            .unwrap_or(defaults.growth_deceleration),
    }
}

/// Translate engine output into the persisted shape
pub fn to_case_financials(results: &FinancialResults) -> CaseFinancials {
    CaseFinancials {
        annual_revenues: results.annual_revenues.clone(),
        cash_flows: results.cash_flows.clone(),
        cumulative_cash_flows: results.cumulative_cash_flows.clone(),
        npv: results.npv,
        irr: results.irr,
        payback_months: results.payback_months,
        monthly_revenue: results.monthly_revenue,
        annual_revenue: results.annual_revenue,
        total_revenue_5yr: results.total_revenue_5yr,
        contribution_margin: results.contribution_margin,
    }
}
