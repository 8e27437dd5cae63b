//! Turns provider statement rows and quotes into clean numeric inputs.
//!
//! Provider payloads arrive as optional-field records. This module is the
//! boundary where absent line items become absent observations and absent
//! essential quote fields become `MissingData` errors, so nothing downstream
//! ever sees a sentinel default.

use chrono::NaiveDate;
use paft::domain::Period;
use paft::fundamentals::statements::{BalanceSheetRow, CashflowRow, IncomeStatementRow};
use paft::market::quote::Quote;
use paft::money::Money;
use rust_decimal::prelude::ToPrimitive;

use crate::{FairvalError, FinancialSeries, Observation, QuoteSnapshot};

/// Convert a money amount to `f64`, treating unrepresentable values as absent.
#[must_use]
pub fn money_to_f64(m: &Money) -> Option<f64> {
    m.amount().to_f64().filter(|v| v.is_finite())
}

fn period_date(period: &Period) -> Option<NaiveDate> {
    match period {
        Period::Date(d) => Some(*d),
        _ => None,
    }
}

fn collect_series<R>(
    rows: &[R],
    period: impl Fn(&R) -> &Period,
    value: impl Fn(&R) -> Option<f64>,
) -> FinancialSeries {
    let points = rows
        .iter()
        .filter_map(|r| {
            period_date(period(r)).map(|date| Observation {
                period: date,
                value: value(r),
            })
        })
        .collect();
    FinancialSeries::from_unordered(points)
}

/// Total revenue per reporting period.
#[must_use]
pub fn revenue_series(rows: &[IncomeStatementRow]) -> FinancialSeries {
    collect_series(
        rows,
        |r| &r.period,
        |r| r.total_revenue.as_ref().and_then(money_to_f64),
    )
}

/// Net income per reporting period.
#[must_use]
pub fn net_income_series(rows: &[IncomeStatementRow]) -> FinancialSeries {
    collect_series(
        rows,
        |r| &r.period,
        |r| r.net_income.as_ref().and_then(money_to_f64),
    )
}

/// Free cash flow per reporting period.
///
/// Uses the reported figure when present, otherwise operating cash flow plus
/// capital expenditures (which providers report as a negative amount).
#[must_use]
pub fn free_cash_flow_series(rows: &[CashflowRow]) -> FinancialSeries {
    collect_series(
        rows,
        |r| &r.period,
        |r| {
            r.free_cash_flow.as_ref().and_then(money_to_f64).or_else(|| {
                let ocf = r.operating_cashflow.as_ref().and_then(money_to_f64)?;
                let capex = r.capital_expenditures.as_ref().and_then(money_to_f64)?;
                Some(ocf + capex)
            })
        },
    )
}

/// Most recent positive share count across the balance sheet rows.
#[must_use]
pub fn shares_outstanding(rows: &[BalanceSheetRow]) -> Option<f64> {
    rows.iter()
        .filter_map(|r| {
            let date = period_date(&r.period)?;
            #[allow(clippy::cast_precision_loss)]
            let shares = r.shares_outstanding? as f64;
            (shares > 0.0).then_some((date, shares))
        })
        .max_by_key(|(date, _)| *date)
        .map(|(_, shares)| shares)
}

/// Last traded price reported in the quote.
#[must_use]
pub fn quote_price(quote: &Quote) -> Option<f64> {
    quote.price.as_ref().and_then(money_to_f64)
}

/// Currency code of the quoted price.
#[must_use]
pub fn quote_currency(quote: &Quote) -> Option<String> {
    quote.price.as_ref().map(|m| m.currency().to_string())
}

/// Validate the essential quote fields for per-share math.
///
/// # Errors
/// Returns `MissingData` when the price or the share count is absent or not
/// positive. Shares are never defaulted.
pub fn snapshot(
    price: Option<f64>,
    shares: Option<f64>,
    currency: Option<String>,
) -> Result<QuoteSnapshot, FairvalError> {
    QuoteSnapshot::try_new(price, shares, currency)
}
