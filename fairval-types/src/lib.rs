//! Data model, assumptions, report envelopes, and the error taxonomy shared by
//! every fairval crate.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod estimate;
mod reports;
mod series;

pub use capability::Capability;
pub use config::{Assumptions, FairvalConfig, MAX_HORIZON_YEARS, MIN_HORIZON_YEARS, ValuationInputs};
pub use connector::ConnectorKey;
pub use error::FairvalError;
pub use estimate::Estimate;
pub use reports::{
    BaseRevenueSource, HistoricalSummary, MethodValuation, QuoteSnapshot, TrailingRow,
    ValuationReport, ValuationResult, Verdict,
};
pub use series::{FinancialSeries, Observation};
