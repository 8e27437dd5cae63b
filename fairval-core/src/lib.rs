//! fairval-core
//!
//! Connector contracts and the pure valuation pipeline shared across the
//! fairval workspace.
//!
//! - `connector`: the `FairvalConnector` trait and capability provider traits.
//! - `extract`: turns provider statement rows and quotes into clean numeric series.
//! - `analysis`: trailing CAGR and average margins over look-back windows.
//! - `projection`: compounding and discounting with explicit domain checks.
//! - `valuation`: earnings- and cash-flow-based intrinsic values and their blend.
//!
//! Everything outside `connector` is synchronous and side-effect free; one
//! evaluation pass is a chain of plain function calls.
#![warn(missing_docs)]

/// Connector capability traits and the primary `FairvalConnector` interface.
pub mod connector;
/// Metric extraction from provider payloads.
pub mod extract;
/// Historical growth and margin statistics.
pub mod analysis;
/// Exponential projection and discounting.
pub mod projection;
/// Multiple-based valuation engine.
pub mod valuation;
pub mod types;

pub use analysis::{
    compute_average_margin, compute_cagr, derive_margin_series, summarize, trailing_cagr,
};
pub use connector::FairvalConnector;
pub use projection::{discount, project};
pub use valuation::{blend, compare, evaluate, value_by_cashflow, value_by_earnings};
pub use types::*;
