#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use fairval_core::connector::{
    BalanceSheetProvider, CashflowProvider, IncomeStatementProvider, QuoteProvider,
};
use fairval_core::{
    AssetKind, BalanceSheetRow, CashflowRow, FairvalConnector, FairvalError, IncomeStatementRow,
    Instrument, Quote,
};
use tokio::time::{Duration, sleep};

type QuoteFn = Arc<dyn Fn(&Instrument) -> Result<Quote, FairvalError> + Send + Sync>;
type RowsFn<R> = Arc<dyn Fn(&Instrument, bool) -> Result<Vec<R>, FairvalError> + Send + Sync>;

/// In-memory connector whose capabilities are scripted per test with closures.
///
/// A capability is advertised only when its closure is set.
pub struct MockConnector {
    name: &'static str,
    kind_ok: Option<AssetKind>,
    delay: Duration,
    quote_fn: Option<QuoteFn>,
    income_statement_fn: Option<RowsFn<IncomeStatementRow>>,
    balance_sheet_fn: Option<RowsFn<BalanceSheetRow>>,
    cashflow_fn: Option<RowsFn<CashflowRow>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder {
            inner: Self {
                name: "mock",
                kind_ok: None,
                delay: Duration::ZERO,
                quote_fn: None,
                income_statement_fn: None,
                balance_sheet_fn: None,
                cashflow_fn: None,
            },
        }
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

pub struct MockConnectorBuilder {
    inner: MockConnector,
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }
    pub fn supports_kind(mut self, kind: AssetKind) -> Self {
        self.inner.kind_ok = Some(kind);
        self
    }
    pub fn delay(mut self, d: Duration) -> Self {
        self.inner.delay = d;
        self
    }
    pub fn with_quote_fn(
        mut self,
        f: impl Fn(&Instrument) -> Result<Quote, FairvalError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.quote_fn = Some(Arc::new(f));
        self
    }
    pub fn with_income_statement_fn(
        mut self,
        f: impl Fn(&Instrument, bool) -> Result<Vec<IncomeStatementRow>, FairvalError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.inner.income_statement_fn = Some(Arc::new(f));
        self
    }
    pub fn with_balance_sheet_fn(
        mut self,
        f: impl Fn(&Instrument, bool) -> Result<Vec<BalanceSheetRow>, FairvalError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.inner.balance_sheet_fn = Some(Arc::new(f));
        self
    }
    pub fn with_cashflow_fn(
        mut self,
        f: impl Fn(&Instrument, bool) -> Result<Vec<CashflowRow>, FairvalError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.inner.cashflow_fn = Some(Arc::new(f));
        self
    }
    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(self.inner)
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, i: &Instrument) -> Result<Quote, FairvalError> {
        self.pause().await;
        match &self.quote_fn {
            Some(f) => f(i),
            None => Err(FairvalError::unsupported("quote")),
        }
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(
        &self,
        i: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FairvalError> {
        self.pause().await;
        match &self.income_statement_fn {
            Some(f) => f(i, quarterly),
            None => Err(FairvalError::unsupported("income-statement")),
        }
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn balance_sheet(
        &self,
        i: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<BalanceSheetRow>, FairvalError> {
        self.pause().await;
        match &self.balance_sheet_fn {
            Some(f) => f(i, quarterly),
            None => Err(FairvalError::unsupported("balance-sheet")),
        }
    }
}

#[async_trait]
impl CashflowProvider for MockConnector {
    async fn cashflow(
        &self,
        i: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<CashflowRow>, FairvalError> {
        self.pause().await;
        match &self.cashflow_fn {
            Some(f) => f(i, quarterly),
            None => Err(FairvalError::unsupported("cashflow")),
        }
    }
}

impl FairvalConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_kind(&self, kind: AssetKind) -> bool {
        self.kind_ok.is_none_or(|k| k == kind)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.quote_fn.as_ref().map(|_| self as &dyn QuoteProvider)
    }
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        self.income_statement_fn
            .as_ref()
            .map(|_| self as &dyn IncomeStatementProvider)
    }
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        self.balance_sheet_fn
            .as_ref()
            .map(|_| self as &dyn BalanceSheetProvider)
    }
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        self.cashflow_fn.as_ref().map(|_| self as &dyn CashflowProvider)
    }
}
