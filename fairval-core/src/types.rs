//! Re-export of foundational types from `paft` and `fairval-types`.
// Consolidated re-exports so downstream crates can depend on `fairval-core` only

pub use fairval_types::{
    Assumptions, BaseRevenueSource, Capability, ConnectorKey, Estimate, FairvalConfig,
    FairvalError, FinancialSeries, HistoricalSummary, MAX_HORIZON_YEARS, MIN_HORIZON_YEARS,
    MethodValuation, Observation, QuoteSnapshot, TrailingRow, ValuationInputs, ValuationReport,
    ValuationResult, Verdict,
};

pub use paft::domain::{AssetKind, Exchange, Instrument, Period, Symbol};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use paft::Decimal;

pub use paft::fundamentals::statements::{BalanceSheetRow, CashflowRow, IncomeStatementRow};

pub use paft::market::quote::Quote;
