//! Internal rate of return via Newton-Raphson iteration
//!
//! The only computation in the engine with a true failure mode: when the
//! cash flows admit no real IRR, or the iteration budget runs out, the
//! result is `None`. Callers render that as "not computable", never as zero.

use log::{debug, trace};

/// Starting rate for the iteration
pub const DEFAULT_GUESS: f64 = 0.1;

/// Iteration budget before giving up
pub const MAX_ITERATIONS: u32 = 100;

/// Convergence threshold on the rate update
pub const TOLERANCE: f64 = 1e-7;

/// Below this derivative magnitude the update would divide by near-zero;
/// nudge the rate instead
pub const MIN_DERIVATIVE: f64 = 1e-12;

/// Rate the iterate is clamped to when it runs away toward the
/// `(1 + r)` singularity at -1
pub const MIN_RATE_CLAMP: f64 = -0.5;

/// Threshold at which the runaway clamp engages
const RATE_FLOOR: f64 = -0.99;

/// Find the discount rate at which NPV of `flows` is zero
///
/// Returns the annual IRR as a decimal (0.25 for 25%), or `None` when no
/// real IRR exists (fewer than two flows, or no sign change in the series)
/// or Newton-Raphson fails to converge within [`MAX_ITERATIONS`].
pub fn calculate_irr(flows: &[f64]) -> Option<f64> {
    calculate_irr_from(flows, DEFAULT_GUESS)
}

/// [`calculate_irr`] with an explicit starting guess
pub fn calculate_irr_from(flows: &[f64], guess: f64) -> Option<f64> {
    // An IRR needs at least one outflow and one inflow over two or more
    // periods
    if flows.len() < 2 {
        return None;
    }
    let has_positive = flows.iter().any(|&flow| flow > 0.0);
    let has_negative = flows.iter().any(|&flow| flow < 0.0);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = guess;

    for iteration in 0..MAX_ITERATIONS {
        let (npv, derivative) = npv_and_derivative(flows, rate);

        if derivative.abs() < MIN_DERIVATIVE {
            // Flat spot: a Newton step would divide by near-zero. Nudge the
            // rate off the plateau and retry.
            trace!("irr: flat derivative at rate {rate}, nudging");
            rate += 0.01;
            continue;
        }

        let mut new_rate = rate - npv / derivative;

        // Keep the iterate away from the (1 + r) singularity at -1
        if new_rate <= RATE_FLOOR {
            new_rate = MIN_RATE_CLAMP;
        }

        let delta = new_rate - rate;
        if delta.abs() < TOLERANCE {
            trace!("irr: converged to {new_rate} after {iteration} iterations");
            return Some(new_rate);
        }

        rate = new_rate;
    }

    debug!("irr: no convergence within {MAX_ITERATIONS} iterations");
    None
}

/// NPV and its derivative with respect to the rate
fn npv_and_derivative(flows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut derivative = 0.0;

    for (t, &flow) in flows.iter().enumerate() {
        npv += flow / (1.0 + rate).powi(t as i32);
        if t > 0 {
            derivative -= (t as f64) * flow / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, derivative)
}
