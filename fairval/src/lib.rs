//! Fairval fetches a company's quote and financial statements, projects them
//! under explicit assumptions, and estimates intrinsic value.
//!
//! Overview
//! - Routes requests to connectors that implement the `fairval_core` contracts.
//! - Tries connectors in registration order with a per-provider timeout and
//!   falls back on failure; outcomes collapse to one uniform error.
//! - [`Fairval::evaluate`] runs one synchronous valuation pass: extract
//!   metrics, summarize history, project, discount and blend.
//!
//! Key behaviors and trade-offs
//! - Quote and income statement are essential; cash flow and balance sheet
//!   are optional and degrade to report warnings.
//! - Shares outstanding are never guessed. A missing count is a `MissingData`
//!   error unless the caller supplies one.
//! - No caching, retries or rate limiting. Every call goes to the providers.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use fairval::{Assumptions, Fairval, ValuationInputs};
//! use fairval_core::{AssetKind, Instrument};
//!
//! let fairval = Fairval::builder()
//!     .with_connector(Arc::new(fairval_mock::MockConnector::new()))
//!     .build()?;
//! let pypl = Instrument::from_symbol("PYPL", AssetKind::Equity)?;
//! let report = fairval
//!     .evaluate(&pypl, &Assumptions::default(), &ValuationInputs::default())
//!     .await?;
//! println!("{} fair value {:.2}", report.symbol, report.result.blended_fair_value);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod evaluate;
mod router;

pub use core::{Fairval, FairvalBuilder};
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use fairval_core::{
    AssetKind, Assumptions, BalanceSheetRow, BaseRevenueSource, Capability, CashflowRow, Estimate,
    FairvalConfig, FairvalConnector, FairvalError, HistoricalSummary, IncomeStatementRow,
    Instrument, Quote, QuoteSnapshot, TrailingRow, ValuationInputs, ValuationReport,
    ValuationResult, Verdict,
};
