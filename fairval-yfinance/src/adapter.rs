#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use fairval_core::FairvalError;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Quotes abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfQuotes: Send + Sync {
    /// Fetch quotes for a batch of symbols.
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, FairvalError>;
}

/// Fundamentals abstraction for financial statements.
///
/// Default methods return `unsupported` so tests can override only the endpoints they need.
#[async_trait]
pub trait YfFundamentals: Send + Sync {
    /// Fetch income statement rows. Default returns `unsupported`.
    async fn income_statement(
        &self,
        _symbol: &str,
        _quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FairvalError> {
        Err(FairvalError::unsupported("fundamentals/income_statement"))
    }

    /// Fetch balance sheet rows. Default returns `unsupported`.
    async fn balance_sheet(
        &self,
        _symbol: &str,
        _quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::BalanceSheetRow>, FairvalError> {
        Err(FairvalError::unsupported("fundamentals/balance_sheet"))
    }

    /// Fetch cashflow rows. Default returns `unsupported`.
    async fn cashflow(
        &self,
        _symbol: &str,
        _quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::CashflowRow>, FairvalError> {
        Err(FairvalError::unsupported("fundamentals/cashflow"))
    }
}

/// Production adapter backed by `yfinance_rs::YfClient`.
///
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a default `YfClient` with a cookie-enabled HTTP client and a
    /// browser user agent.
    ///
    /// # Errors
    /// Returns `Connector` if the HTTP client or the `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, FairvalError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| FairvalError::connector(crate::NAME, format!("http client: {e}")))?;
        Self::try_with_http(http)
    }

    /// Build a `YfClient` on top of a caller-provided `reqwest::Client`.
    ///
    /// The client should enable a cookie store for the yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns `Connector` if the `YfClient` cannot be constructed.
    pub fn try_with_http(http: reqwest::Client) -> Result<Self, FairvalError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| map_yf_err(&e, "client setup"))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

pub(crate) fn map_yf_err(e: &yf::YfError, context: &str) -> FairvalError {
    match e {
        yf::YfError::NotFound { .. } => FairvalError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            FairvalError::connector(crate::NAME, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => FairvalError::connector(
            crate::NAME,
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            FairvalError::connector(crate::NAME, format!("status {status}: {context}"))
        }
        other => FairvalError::connector(crate::NAME, other.to_string()),
    }
}

#[async_trait]
impl YfQuotes for RealAdapter {
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, FairvalError> {
        yf::quote::quotes(&self.client, symbols.iter().cloned())
            .await
            .map_err(|e| map_yf_err(&e, "quotes"))
    }
}

#[async_trait]
impl YfFundamentals for RealAdapter {
    async fn income_statement(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FairvalError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        fb.income_statement(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("income statement for {symbol}")))
    }

    async fn balance_sheet(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::BalanceSheetRow>, FairvalError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        fb.balance_sheet(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("balance sheet for {symbol}")))
    }

    async fn cashflow(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::CashflowRow>, FairvalError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        fb.cashflow(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("cashflow for {symbol}")))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfQuotes {
    /// Build a `YfQuotes` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfQuotes>
    where
        F: Send + Sync + 'static + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, FairvalError>,
    {
        struct FnQuotes<F>(F);
        #[async_trait]
        impl<F> YfQuotes for FnQuotes<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, FairvalError>,
        {
            async fn fetch(
                &self,
                symbols: &[String],
            ) -> Result<Vec<yf::core::Quote>, FairvalError> {
                (self.0)(symbols.to_vec())
            }
        }
        Arc::new(FnQuotes(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfFundamentals {
    /// Build a `YfFundamentals` from closures (tests only).
    pub fn from_fns<FI, FB, FC>(fi: FI, fb: FB, fc: FC) -> Arc<dyn YfFundamentals>
    where
        FI: Send
            + Sync
            + 'static
            + Fn(String, bool) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FairvalError>,
        FB: Send
            + Sync
            + 'static
            + Fn(String, bool) -> Result<Vec<yf::fundamentals::BalanceSheetRow>, FairvalError>,
        FC: Send
            + Sync
            + 'static
            + Fn(String, bool) -> Result<Vec<yf::fundamentals::CashflowRow>, FairvalError>,
    {
        struct FnFundamentals<FI, FB, FC> {
            fi: FI,
            fb: FB,
            fc: FC,
        }

        #[async_trait]
        impl<FI, FB, FC> YfFundamentals for FnFundamentals<FI, FB, FC>
        where
            FI: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    bool,
                ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FairvalError>,
            FB: Send
                + Sync
                + 'static
                + Fn(String, bool) -> Result<Vec<yf::fundamentals::BalanceSheetRow>, FairvalError>,
            FC: Send
                + Sync
                + 'static
                + Fn(String, bool) -> Result<Vec<yf::fundamentals::CashflowRow>, FairvalError>,
        {
            async fn income_statement(
                &self,
                symbol: &str,
                quarterly: bool,
            ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FairvalError> {
                (self.fi)(symbol.to_string(), quarterly)
            }

            async fn balance_sheet(
                &self,
                symbol: &str,
                quarterly: bool,
            ) -> Result<Vec<yf::fundamentals::BalanceSheetRow>, FairvalError> {
                (self.fb)(symbol.to_string(), quarterly)
            }

            async fn cashflow(
                &self,
                symbol: &str,
                quarterly: bool,
            ) -> Result<Vec<yf::fundamentals::CashflowRow>, FairvalError> {
                (self.fc)(symbol.to_string(), quarterly)
            }
        }

        Arc::new(FnFundamentals { fi, fb, fc })
    }
}

// Convenience so connector can take a single adapter and split it into both trait objects.
/// Helper trait to split a concrete adapter into arc trait objects.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfQuotes>`.
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        <dyn YfQuotes>::from_fn(|_| Err(FairvalError::unsupported("quote")))
    }
    /// Clone as `Arc<dyn YfFundamentals>`.
    fn clone_arc_fundamentals(&self) -> Arc<dyn YfFundamentals> {
        <dyn YfFundamentals>::from_fns(
            |_s, _q| Err(FairvalError::unsupported("fundamentals/income_statement")),
            |_s, _q| Err(FairvalError::unsupported("fundamentals/balance_sheet")),
            |_s, _q| Err(FairvalError::unsupported("fundamentals/cashflow")),
        )
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        Arc::new(self.clone()) as Arc<dyn YfQuotes>
    }
    fn clone_arc_fundamentals(&self) -> Arc<dyn YfFundamentals> {
        Arc::new(self.clone()) as Arc<dyn YfFundamentals>
    }
}
