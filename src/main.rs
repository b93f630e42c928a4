//! Financial Engine CLI
//!
//! Runs a projection and tornado analysis for one set of assumptions and
//! prints the results, or emits them as JSON for downstream tooling.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use financial_engine::{
    compute_financials, generate_sensitivity_with, sensitivity::DEFAULT_VARIATION_PCT,
    FinancialAssumptions, FinancialResults, SensitivityResult,
};

#[derive(Parser, Debug)]
#[command(name = "financial_engine", about = "Investment-case projection and sensitivity analysis")]
struct Args {
    /// Monthly price per customer
    #[arg(long)]
    monthly_price: Option<f64>,

    /// Customer count in year 1
    #[arg(long)]
    customers: Option<f64>,

    /// Nominal year-over-year revenue growth (percent)
    #[arg(long)]
    growth: Option<f64>,

    /// Gross margin (percent, informational)
    #[arg(long)]
    margin: Option<f64>,

    /// Upfront investment
    #[arg(long)]
    investment: Option<f64>,

    /// Discount rate for NPV (percent)
    #[arg(long)]
    discount_rate: Option<f64>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<usize>,

    /// Sensitivity variation (percent)
    #[arg(long, default_value_t = DEFAULT_VARIATION_PCT)]
    variation: f64,

    /// Emit results as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    assumptions: FinancialAssumptions,
    financials: FinancialResults,
    sensitivity: SensitivityResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let assumptions = build_assumptions(&args);

    let financials = compute_financials(&assumptions);
    let sensitivity = generate_sensitivity_with(&assumptions, args.variation);

    if args.json {
        let report = Report {
            assumptions,
            financials,
            sensitivity,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&assumptions, &financials, &sensitivity);
    Ok(())
}

fn build_assumptions(args: &Args) -> FinancialAssumptions {
    let defaults = FinancialAssumptions::default();
    FinancialAssumptions {
        monthly_price: args.monthly_price.unwrap_or(defaults.monthly_price),
        year1_customers: args.customers.unwrap_or(defaults.year1_customers),
        revenue_growth_pct: args.growth.unwrap_or(defaults.revenue_growth_pct),
        gross_margin_pct: args.margin.unwrap_or(defaults.gross_margin_pct),
        investment_amount: args.investment.unwrap_or(defaults.investment_amount),
        discount_rate: args.discount_rate.unwrap_or(defaults.discount_rate),
        projection_years: args.years.unwrap_or(defaults.projection_years),
        ..defaults
    }
}

fn print_report(
    assumptions: &FinancialAssumptions,
    financials: &FinancialResults,
    sensitivity: &SensitivityResult,
) {
    println!("Financial Engine v0.1.0");
    println!("=======================\n");

    println!("Assumptions:");
    println!("  Monthly Price: ${:.2}", assumptions.monthly_price);
    println!("  Year-1 Customers: {:.0}", assumptions.year1_customers);
    println!("  Revenue Growth: {:.1}%", assumptions.revenue_growth_pct);
    println!("  Investment: ${:.2}", assumptions.investment_amount);
    println!("  Discount Rate: {:.1}%", assumptions.discount_rate);
    println!("  Horizon: {} years", assumptions.projection_years);
    println!();

    println!("Projection:");
    println!(
        "{:>5} {:>16} {:>16} {:>16}",
        "Year", "Revenue", "Cash Flow", "Cumulative"
    );
    println!("{}", "-".repeat(56));
    println!(
        "{:>5} {:>16} {:>16.2} {:>16.2}",
        0, "-", financials.cash_flows[0], financials.cumulative_cash_flows[0]
    );
    for (i, &revenue) in financials.annual_revenues.iter().enumerate() {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2}",
            i + 1,
            revenue,
            financials.cash_flows[i + 1],
            financials.cumulative_cash_flows[i + 1]
        );
    }
    println!();

    println!("Metrics:");
    println!("  NPV: ${:.2}", financials.npv);
    match financials.irr {
        Some(irr) => println!("  IRR: {:.2}%", irr * 100.0),
        None => println!("  IRR: -"),
    }
    match financials.payback_months {
        Some(months) => println!("  Payback: {:.0} months", months),
        None => println!("  Payback: -"),
    }
    println!("  Monthly Revenue: ${:.2}", financials.monthly_revenue);
    println!("  Total Revenue: ${:.2}", financials.total_revenue_5yr);
    println!(
        "  Contribution Margin: {:.1}%",
        financials.contribution_margin
    );
    println!();

    println!(
        "Sensitivity (+/-{:.0}%, base NPV ${:.2}):",
        sensitivity.variation_pct, sensitivity.base_npv
    );
    println!(
        "{:<20} {:>16} {:>16} {:>16}",
        "Input", "Low NPV", "High NPV", "Spread"
    );
    println!("{}", "-".repeat(71));
    for bar in &sensitivity.bars {
        println!(
            "{:<20} {:>16.2} {:>16.2} {:>16.2}",
            bar.input.label(),
            bar.low_npv,
            bar.high_npv,
            bar.spread
        );
    }
}
