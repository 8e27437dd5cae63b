use async_trait::async_trait;
use fairval_core::connector::{
    BalanceSheetProvider, CashflowProvider, FairvalConnector, IncomeStatementProvider,
    QuoteProvider,
};
use fairval_core::{
    AssetKind, BalanceSheetRow, CashflowRow, FairvalError, IncomeStatementRow, Instrument, Quote,
};

mod fixtures;

/// Mock connector for offline runs and CI. Provides deterministic data from static fixtures.
///
/// Fixture symbols:
/// - `PYPL`: eleven fiscal years of statements, 1e9 shares, price 60.
/// - `KO`: five fiscal years, no cash-flow statement.
/// - `NOSHARES`: balance sheet without a share count.
/// - `NOPRICE`: quote without a last price.
/// - `FAIL`: every capability returns a connector error.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Stable connector name.
    pub const NAME: &'static str = "fairval-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str, s: &str) -> FairvalError {
        FairvalError::not_found(format!("{what} for {s}"))
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), FairvalError> {
        if symbol == "FAIL" {
            return Err(FairvalError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl FairvalConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

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

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, instrument: &Instrument) -> Result<Quote, FairvalError> {
        let s = instrument.symbol_str();
        Self::maybe_fail(s, "quote")?;
        fixtures::quotes::by_symbol(s)?.ok_or_else(|| Self::not_found("quote", s))
    }
}

// Statements are annual-only; the cadence flag is ignored.
#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(
        &self,
        instrument: &Instrument,
        _q: bool,
    ) -> Result<Vec<IncomeStatementRow>, FairvalError> {
        let s = instrument.symbol_str();
        Self::maybe_fail(s, "income-statement")?;
        fixtures::fundamentals::income_stmt_by_symbol(s)?
            .ok_or_else(|| Self::not_found("fundamentals", s))
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn balance_sheet(
        &self,
        instrument: &Instrument,
        _q: bool,
    ) -> Result<Vec<BalanceSheetRow>, FairvalError> {
        let s = instrument.symbol_str();
        Self::maybe_fail(s, "balance-sheet")?;
        fixtures::fundamentals::balance_sheet_by_symbol(s)?
            .ok_or_else(|| Self::not_found("fundamentals", s))
    }
}

#[async_trait]
impl CashflowProvider for MockConnector {
    async fn cashflow(
        &self,
        instrument: &Instrument,
        _q: bool,
    ) -> Result<Vec<CashflowRow>, FairvalError> {
        let s = instrument.symbol_str();
        Self::maybe_fail(s, "cashflow")?;
        fixtures::fundamentals::cashflow_by_symbol(s)?
            .ok_or_else(|| Self::not_found("fundamentals", s))
    }
}
