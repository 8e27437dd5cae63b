//! Valuation results and the report envelope produced by the orchestrator.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Assumptions;
use crate::error::FairvalError;
use crate::estimate::Estimate;

/// Validated market snapshot used for per-share math and price comparison.
///
/// Construct through [`QuoteSnapshot::try_new`]; both fields are positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Last traded price.
    pub price: f64,
    /// Shares outstanding.
    pub shares_outstanding: f64,
    /// ISO code of the quote currency, if the provider reported one.
    pub currency: Option<String>,
}

impl QuoteSnapshot {
    /// Validate the essential quote fields.
    ///
    /// # Errors
    /// Returns `MissingData` when either field is absent, zero, negative, or non-finite.
    pub fn try_new(
        price: Option<f64>,
        shares_outstanding: Option<f64>,
        currency: Option<String>,
    ) -> Result<Self, FairvalError> {
        let price = price
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| FairvalError::missing("current price"))?;
        let shares_outstanding = shares_outstanding
            .filter(|s| s.is_finite() && *s > 0.0)
            .ok_or_else(|| FairvalError::missing("shares outstanding"))?;
        Ok(Self {
            price,
            shares_outstanding,
            currency,
        })
    }
}

/// Whether the blended fair value sits above or below the market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Fair value is strictly greater than the current price.
    Undervalued,
    /// Fair value is at or below the current price.
    Overvalued,
}

impl Verdict {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undervalued => "undervalued",
            Self::Overvalued => "overvalued",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one multiple-based valuation path (earnings or free cash flow).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodValuation {
    /// Projected revenue at the end of the horizon.
    pub future_revenue: f64,
    /// Projected line item (net income or FCF) at the end of the horizon.
    pub future_amount: f64,
    /// `future_amount` divided by shares outstanding.
    pub future_per_share: f64,
    /// `future_per_share` times the terminal multiple.
    pub future_price: f64,
    /// `future_price` discounted back at the required return.
    pub intrinsic_value: f64,
}

/// Derived valuation for one evaluation pass. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Revenue after compounding over the horizon.
    pub future_revenue: f64,
    /// Net income implied by the target net margin.
    pub future_net_income: f64,
    /// Free cash flow implied by the target FCF margin.
    pub future_fcf: f64,
    /// Future earnings per share.
    pub future_eps: f64,
    /// Future free cash flow per share.
    pub future_fcf_per_share: f64,
    /// Terminal price from EPS and the P/E multiple.
    pub future_price_by_earnings: f64,
    /// Terminal price from FCF/share and the P/FCF multiple.
    pub future_price_by_cashflow: f64,
    /// Present value of the earnings-based terminal price.
    pub intrinsic_value_by_earnings: f64,
    /// Present value of the cash-flow-based terminal price.
    pub intrinsic_value_by_cashflow: f64,
    /// Unweighted mean of the two intrinsic values.
    pub blended_fair_value: f64,
    /// `(fair - price) / price * 100`.
    pub percent_difference_from_price: f64,
    /// Undervalued iff the blended fair value exceeds the price.
    pub verdict: Verdict,
}

/// Trailing statistics for one look-back window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingRow {
    /// Look-back window in years.
    pub window_years: u32,
    /// Compound annual revenue growth over the window.
    pub revenue_cagr: Estimate,
    /// Mean net margin over the last `window_years` periods.
    pub average_net_margin: Estimate,
    /// Mean free-cash-flow margin over the last `window_years` periods.
    pub average_fcf_margin: Estimate,
}

/// Historical CAGR/margin table that informs the user's assumptions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricalSummary {
    /// One row per requested window, in request order.
    pub rows: Vec<TrailingRow>,
    /// Latest reported annual revenue, if any.
    pub latest_revenue: Option<f64>,
    /// Number of periods with a reported revenue value.
    pub periods_available: usize,
    /// Windows that exceeded the available history.
    pub insufficient_windows: Vec<u32>,
}

/// Where the base revenue for the projection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseRevenueSource {
    /// Supplied by the caller.
    UserInput,
    /// Latest annual revenue reported by the provider.
    LatestReported,
}

/// Full outcome of an evaluation request.
///
/// Carries the inputs actually used, the derived valuation, the historical
/// table, and any non-fatal warnings encountered along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Requested ticker symbol.
    pub symbol: String,
    /// Validated quote snapshot used for per-share math.
    pub quote: QuoteSnapshot,
    /// Revenue the projection started from.
    pub base_revenue: f64,
    /// Origin of `base_revenue`.
    pub base_revenue_source: BaseRevenueSource,
    /// Assumptions the valuation ran under.
    pub assumptions: Assumptions,
    /// Derived valuation.
    pub result: ValuationResult,
    /// Historical CAGR/margin table.
    pub history: HistoricalSummary,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<String>,
}
