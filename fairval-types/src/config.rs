//! Valuation assumptions and orchestrator configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FairvalError;

/// Shortest projection horizon accepted by [`Assumptions::validate`].
pub const MIN_HORIZON_YEARS: u32 = 1;
/// Longest projection horizon accepted by [`Assumptions::validate`].
pub const MAX_HORIZON_YEARS: u32 = 10;

/// User-chosen valuation assumptions. All rates are fractions (0.06 = 6%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Compounding rate applied to base revenue over the horizon.
    pub revenue_growth_rate: f64,
    /// Fraction of future revenue converted to net income.
    pub target_net_margin: f64,
    /// Fraction of future revenue converted to free cash flow.
    pub target_fcf_margin: f64,
    /// Discount rate applied to both future-price estimates.
    pub required_return: f64,
    /// Number of compounding/discounting periods.
    pub horizon_years: u32,
    /// Terminal price/earnings multiple.
    pub target_pe_multiple: f64,
    /// Terminal price/free-cash-flow multiple.
    pub target_pfcf_multiple: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            revenue_growth_rate: 0.06,
            target_net_margin: 0.15,
            target_fcf_margin: 0.18,
            required_return: 0.12,
            horizon_years: 10,
            target_pe_multiple: 15.0,
            target_pfcf_multiple: 18.0,
        }
    }
}

impl Assumptions {
    /// Check that every field is usable by the valuation engine.
    ///
    /// Rates below -100% are left to the projector, which rejects them with
    /// a `Domain` error at the step that would exponentiate them.
    ///
    /// # Errors
    /// Returns `InvalidArg` for non-finite values, a horizon outside
    /// `MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS`, negative margins, or negative
    /// multiples.
    pub fn validate(&self) -> Result<(), FairvalError> {
        let fields = [
            ("revenue_growth_rate", self.revenue_growth_rate),
            ("target_net_margin", self.target_net_margin),
            ("target_fcf_margin", self.target_fcf_margin),
            ("required_return", self.required_return),
            ("target_pe_multiple", self.target_pe_multiple),
            ("target_pfcf_multiple", self.target_pfcf_multiple),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FairvalError::InvalidArg(format!("{name} must be finite")));
        }
        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            return Err(FairvalError::InvalidArg(format!(
                "horizon_years must be within {MIN_HORIZON_YEARS}..={MAX_HORIZON_YEARS}, got {}",
                self.horizon_years
            )));
        }
        if self.target_net_margin < 0.0 || self.target_fcf_margin < 0.0 {
            return Err(FairvalError::InvalidArg(
                "target margins must not be negative".into(),
            ));
        }
        if self.target_pe_multiple < 0.0 || self.target_pfcf_multiple < 0.0 {
            return Err(FairvalError::InvalidArg(
                "terminal multiples must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Per-request overrides for values that otherwise come from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Base annual revenue in currency units; defaults to the latest reported revenue.
    pub base_revenue: Option<f64>,
    /// Shares outstanding; defaults to the latest balance sheet share count.
    pub shares_outstanding: Option<f64>,
}

/// Global configuration for the `Fairval` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairvalConfig {
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Look-back windows (years) for the trailing CAGR/margin table.
    pub history_windows: Vec<u32>,
}

impl Default for FairvalConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            history_windows: vec![1, 5, 10],
        }
    }
}
