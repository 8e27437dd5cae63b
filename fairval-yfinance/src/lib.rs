//! fairval-yfinance
//!
//! Public connector that implements `FairvalConnector` on top of the `yfinance-rs`
//! client library. Exposes quotes and annual or quarterly financial statements
//! (income statement, balance sheet, cash flow).
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfFundamentals, YfQuotes};
use async_trait::async_trait;
use fairval_core::{
    AssetKind, BalanceSheetRow, CashflowRow, FairvalError, IncomeStatementRow, Instrument, Quote,
    connector::{
        BalanceSheetProvider, CashflowProvider, ConnectorKey, FairvalConnector,
        IncomeStatementProvider, QuoteProvider,
    },
};

pub(crate) const NAME: &str = "fairval-yfinance";

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type QuotesAdapter = Arc<dyn YfQuotes>;
#[cfg(not(feature = "test-adapters"))]
type QuotesAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type FundamentalsAdapter = Arc<dyn YfFundamentals>;
#[cfg(not(feature = "test-adapters"))]
type FundamentalsAdapter = AdapterArc;

/// Public connector type. Production users will construct with `YfConnector::try_new_default()`.
pub struct YfConnector {
    quotes: QuotesAdapter,
    fundamentals: FundamentalsAdapter,
}

impl YfConnector {
    /// Static connector key for logs and error attribution.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: FairvalError, what: &str) -> FairvalError {
        match e {
            FairvalError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    FairvalError::not_found(what.to_string())
                } else {
                    FairvalError::connector(NAME, msg)
                }
            }
            FairvalError::Other(msg) => FairvalError::connector(NAME, msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns `Connector` if the underlying HTTP or Yahoo client cannot be built.
    pub fn try_new_default() -> Result<Self, FairvalError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, FairvalError> {
        let a = RealAdapter::try_with_http(http)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            quotes: adapter.clone_arc_quotes(),
            fundamentals: adapter.clone_arc_fundamentals(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            quotes: Arc::clone(&shared),
            fundamentals: shared,
        }
    }
}

#[async_trait]
impl QuoteProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "fairval::yfinance",
            skip(self, instrument),
            fields(symbol = %instrument.symbol()),
        )
    )]
    async fn quote(&self, instrument: &Instrument) -> Result<Quote, FairvalError> {
        let what = format!("quote for {}", instrument.symbol());
        let raw = self
            .quotes
            .fetch(std::slice::from_ref(&instrument.symbol_str().to_string()))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        raw.into_iter()
            .next()
            .ok_or_else(|| FairvalError::not_found(what))
    }
}

#[async_trait]
impl IncomeStatementProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "fairval::yfinance",
            skip(self, instrument),
            fields(symbol = %instrument.symbol()),
        )
    )]
    async fn income_statement(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FairvalError> {
        let symbol = instrument.symbol_str();
        self.fundamentals
            .income_statement(symbol, quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("fundamentals for {symbol}")))
    }
}

#[async_trait]
impl BalanceSheetProvider for YfConnector {
    async fn balance_sheet(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<BalanceSheetRow>, FairvalError> {
        let symbol = instrument.symbol_str();
        self.fundamentals
            .balance_sheet(symbol, quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("fundamentals for {symbol}")))
    }
}

#[async_trait]
impl CashflowProvider for YfConnector {
    async fn cashflow(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<CashflowRow>, FairvalError> {
        let symbol = instrument.symbol_str();
        self.fundamentals
            .cashflow(symbol, quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("fundamentals for {symbol}")))
    }
}

impl FairvalConnector for YfConnector {
    fn name(&self) -> &'static str {
        NAME
    }
    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    // Statements only make sense for operating companies.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        matches!(kind, AssetKind::Equity)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        Some(self as &dyn CashflowProvider)
    }
}
