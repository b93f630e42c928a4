//! Financial Engine - Deterministic modeling core for investment-case projections
//!
//! This library provides:
//! - Multi-year revenue and cash-flow projection with decelerating growth
//!   and a net-margin ramp
//! - Discounted cash-flow metrics: NPV, IRR (Newton-Raphson), payback period
//! - One-at-a-time (tornado) sensitivity analysis of NPV
//! - Adapters to and from the dashboard's persistence schema
//!
//! The engine is stateless and synchronous: every entry point is a pure
//! function of its arguments, safe to call reentrantly with no coordination.

pub mod assumptions;
pub mod case;
pub mod projection;
pub mod sensitivity;

// Re-export commonly used types
pub use assumptions::{FinancialAssumptions, YearSchedule};
pub use case::{to_case_financials, to_financial_assumptions, CaseAssumptions, CaseFinancials};
pub use projection::{
    calculate_irr, calculate_npv, calculate_payback, compute_financials, cumulative_cash_flows,
    project_cash_flows, project_revenues, FinancialResults,
};
pub use sensitivity::{
    generate_sensitivity, generate_sensitivity_with, SensitivityInput, SensitivityResult,
    TornadoBar,
};
