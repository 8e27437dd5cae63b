//! Provider role traits and the connector contract that routing relies on.

use async_trait::async_trait;

use crate::FairvalError;
pub use fairval_types::ConnectorKey;
use paft::domain::{AssetKind, Instrument};
use paft::fundamentals::statements::{BalanceSheetRow, CashflowRow, IncomeStatementRow};
use paft::market::quote::Quote;

/// Focused role trait for connectors that provide quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch a point-in-time quote for the given instrument.
    async fn quote(&self, instrument: &Instrument) -> Result<Quote, FairvalError>;
}

/// Focused role trait for connectors that provide income statements.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync {
    /// Fetch income statement rows for the given instrument.
    async fn income_statement(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FairvalError>;
}

/// Focused role trait for connectors that provide balance sheets.
#[async_trait]
pub trait BalanceSheetProvider: Send + Sync {
    /// Fetch balance sheet rows for the given instrument.
    async fn balance_sheet(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<BalanceSheetRow>, FairvalError>;
}

/// Focused role trait for connectors that provide cashflow statements.
#[async_trait]
pub trait CashflowProvider: Send + Sync {
    /// Fetch cashflow rows for the given instrument.
    async fn cashflow(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<CashflowRow>, FairvalError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait FairvalConnector: Send + Sync {
    /// A stable identifier used in errors and logs (e.g., "fairval-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to support a given asset kind.
    ///
    /// Default: returns `false` for all kinds. Connectors must explicitly override
    /// this method to declare which asset kinds they support.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        let _ = kind;
        false
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// If implemented, returns a trait object for income statements.
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        None
    }

    /// If implemented, returns a trait object for balance sheets.
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        None
    }

    /// If implemented, returns a trait object for cashflow statements.
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        None
    }
}
