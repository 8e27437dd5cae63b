//! Two multiple-based intrinsic value estimates and their blend.
//!
//! Both paths project base revenue over the horizon, convert it to a
//! per-share amount through a target margin, price that amount with a
//! terminal multiple and discount the price back at the required return.

use crate::projection::{discount, project};
use crate::{Assumptions, FairvalError, MethodValuation, QuoteSnapshot, ValuationResult, Verdict};

struct MethodInputs {
    margin: f64,
    multiple: f64,
}

fn value_by_method(
    base_revenue: f64,
    shares: f64,
    assumptions: &Assumptions,
    method: &MethodInputs,
) -> Result<MethodValuation, FairvalError> {
    if !(shares.is_finite() && shares > 0.0) {
        return Err(FairvalError::domain(format!(
            "shares outstanding must be positive, got {shares}"
        )));
    }
    let horizon = f64::from(assumptions.horizon_years);
    let future_revenue = project(base_revenue, assumptions.revenue_growth_rate, horizon)?;
    let future_amount = future_revenue * method.margin;
    let future_per_share = future_amount / shares;
    let future_price = future_per_share * method.multiple;
    let intrinsic_value = discount(future_price, assumptions.required_return, horizon)?;
    Ok(MethodValuation {
        future_revenue,
        future_amount,
        future_per_share,
        future_price,
        intrinsic_value,
    })
}

/// Earnings path: net margin, EPS and the terminal P/E multiple.
///
/// # Errors
/// Returns `Domain` for a non-positive share count or an out-of-domain
/// growth or discount rate.
pub fn value_by_earnings(
    base_revenue: f64,
    shares: f64,
    assumptions: &Assumptions,
) -> Result<MethodValuation, FairvalError> {
    value_by_method(
        base_revenue,
        shares,
        assumptions,
        &MethodInputs {
            margin: assumptions.target_net_margin,
            multiple: assumptions.target_pe_multiple,
        },
    )
}

/// Cash-flow path: FCF margin, FCF per share and the terminal P/FCF multiple.
///
/// # Errors
/// Same as [`value_by_earnings`].
pub fn value_by_cashflow(
    base_revenue: f64,
    shares: f64,
    assumptions: &Assumptions,
) -> Result<MethodValuation, FairvalError> {
    value_by_method(
        base_revenue,
        shares,
        assumptions,
        &MethodInputs {
            margin: assumptions.target_fcf_margin,
            multiple: assumptions.target_pfcf_multiple,
        },
    )
}

/// Unweighted mean of two intrinsic value estimates.
#[must_use]
pub fn blend(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Percent difference of `fair` from `price` and the resulting verdict.
///
/// # Errors
/// Returns `Domain` when `price <= 0` or either input is non-finite.
pub fn compare(fair: f64, price: f64) -> Result<(f64, Verdict), FairvalError> {
    if !fair.is_finite() || !price.is_finite() {
        return Err(FairvalError::domain(format!(
            "fair value and price must be finite (fair={fair}, price={price})"
        )));
    }
    if price <= 0.0 {
        return Err(FairvalError::domain(format!(
            "current price must be positive, got {price}"
        )));
    }
    let pct = (fair - price) / price * 100.0;
    let verdict = if fair > price {
        Verdict::Undervalued
    } else {
        Verdict::Overvalued
    };
    Ok((pct, verdict))
}

/// Run the full valuation pipeline for one evaluation pass.
///
/// # Errors
/// Returns `InvalidArg` for invalid assumptions or a base revenue that is
/// not positive and finite, and propagates `Domain` errors from the
/// projection and comparison steps.
pub fn evaluate(
    base_revenue: f64,
    quote: &QuoteSnapshot,
    assumptions: &Assumptions,
) -> Result<ValuationResult, FairvalError> {
    assumptions.validate()?;
    if !(base_revenue.is_finite() && base_revenue > 0.0) {
        return Err(FairvalError::InvalidArg(format!(
            "base revenue must be positive, got {base_revenue}"
        )));
    }
    let earnings = value_by_earnings(base_revenue, quote.shares_outstanding, assumptions)?;
    let cashflow = value_by_cashflow(base_revenue, quote.shares_outstanding, assumptions)?;
    let blended_fair_value = blend(earnings.intrinsic_value, cashflow.intrinsic_value);
    let (percent_difference_from_price, verdict) = compare(blended_fair_value, quote.price)?;

    Ok(ValuationResult {
        future_revenue: earnings.future_revenue,
        future_net_income: earnings.future_amount,
        future_fcf: cashflow.future_amount,
        future_eps: earnings.future_per_share,
        future_fcf_per_share: cashflow.future_per_share,
        future_price_by_earnings: earnings.future_price,
        future_price_by_cashflow: cashflow.future_price,
        intrinsic_value_by_earnings: earnings.intrinsic_value,
        intrinsic_value_by_cashflow: cashflow.intrinsic_value,
        blended_fair_value,
        percent_difference_from_price,
        verdict,
    })
}
