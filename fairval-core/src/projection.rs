//! Compounding and discounting over a number of periods.

use crate::FairvalError;

fn growth_factor(rate: f64, periods: f64) -> Result<f64, FairvalError> {
    if !rate.is_finite() || !periods.is_finite() {
        return Err(FairvalError::domain(format!(
            "rate and periods must be finite (rate={rate}, periods={periods})"
        )));
    }
    if periods < 0.0 {
        return Err(FairvalError::domain(format!(
            "periods must not be negative, got {periods}"
        )));
    }
    let base = 1.0 + rate;
    if base <= 0.0 {
        return Err(FairvalError::domain(format!(
            "rate must be greater than -100%, got {rate}"
        )));
    }
    Ok(base.powf(periods))
}

/// Compound `base` at `rate` for `periods`: `base * (1 + rate)^periods`.
///
/// # Errors
/// Returns `Domain` when `rate <= -1`, `periods < 0`, any input is
/// non-finite, or the result overflows.
pub fn project(base: f64, rate: f64, periods: f64) -> Result<f64, FairvalError> {
    if !base.is_finite() {
        return Err(FairvalError::domain(format!("base value must be finite, got {base}")));
    }
    let value = base * growth_factor(rate, periods)?;
    finite(value, "projected value")
}

/// Discount `future` at `rate` over `periods`: `future / (1 + rate)^periods`.
///
/// # Errors
/// Same domain rules as [`project`].
pub fn discount(future: f64, rate: f64, periods: f64) -> Result<f64, FairvalError> {
    if !future.is_finite() {
        return Err(FairvalError::domain(format!(
            "future value must be finite, got {future}"
        )));
    }
    let value = future / growth_factor(rate, periods)?;
    finite(value, "discounted value")
}

fn finite(value: f64, what: &str) -> Result<f64, FairvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FairvalError::domain(format!("{what} is not finite")))
    }
}
