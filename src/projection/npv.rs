//! Net present value of an annual cash-flow series

/// Discount a cash-flow series to present value
///
/// `rate` is a decimal (0.10 for 10%). The time-0 flow is not discounted;
/// year `i` is divided by `(1 + rate)^i`. No bounds checking: a rate at or
/// below -100% divides by zero or flips sign, and avoiding that domain is
/// the caller's responsibility.
pub fn calculate_npv(flows: &[f64], rate: f64) -> f64 {
    flows
        .iter()
        .enumerate()
        .map(|(t, &flow)| flow / (1.0 + rate).powi(t as i32))
        .sum()
}
