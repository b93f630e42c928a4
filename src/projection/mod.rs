//! Multi-year projection pipeline and derived investment metrics

mod cashflows;
mod engine;
mod irr;
mod npv;
mod payback;
mod revenue;

pub use cashflows::{cumulative_cash_flows, project_cash_flows, FinancialResults};
pub use engine::compute_financials;
pub use irr::{calculate_irr, calculate_irr_from};
pub use npv::calculate_npv;
pub use payback::calculate_payback;
pub use revenue::project_revenues;
