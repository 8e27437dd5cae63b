use std::sync::Arc;

use fairval_core::{Capability, FairvalConfig, FairvalConnector, FairvalError, Instrument};

use crate::router::util::collapse_errors;

/// Orchestrator that routes requests across registered providers and runs
/// the valuation pipeline over what they return.
pub struct Fairval {
    pub(crate) connectors: Vec<Arc<dyn FairvalConnector>>,
    pub(crate) cfg: FairvalConfig,
}

/// Builder for constructing a `Fairval` orchestrator with custom configuration.
pub struct FairvalBuilder {
    connectors: Vec<Arc<dyn FairvalConnector>>,
    cfg: FairvalConfig,
}

impl Default for FairvalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FairvalBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via [`with_connector`](Self::with_connector).
    /// Defaults: 10s provider timeout, trailing windows of 1, 5 and 10 years.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: FairvalConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is priority order: earlier connectors are tried first
    /// and later ones serve as fallbacks.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FairvalConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: FairvalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the look-back windows (years) for the trailing CAGR/margin table.
    #[must_use]
    pub fn history_windows(mut self, windows: impl Into<Vec<u32>>) -> Self {
        self.cfg.history_windows = windows.into();
        self
    }

    /// Build the `Fairval` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, the provider
    /// timeout is zero, or a history window is zero.
    pub fn build(self) -> Result<Fairval, FairvalError> {
        if self.connectors.is_empty() {
            return Err(FairvalError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.provider_timeout.is_zero() {
            return Err(FairvalError::InvalidArg(
                "provider timeout must be greater than zero".to_string(),
            ));
        }
        if self.cfg.history_windows.contains(&0) {
            return Err(FairvalError::InvalidArg(
                "history windows must be at least one year".to_string(),
            ));
        }
        Ok(Fairval {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an untagged provider error to the connector that produced it.
pub(crate) fn tag_err(connector: &str, e: FairvalError) -> FairvalError {
    match e {
        e @ (FairvalError::NotFound { .. }
        | FairvalError::ProviderTimeout { .. }
        | FairvalError::Connector { .. }
        | FairvalError::AllProvidersTimedOut { .. }
        | FairvalError::AllProvidersFailed(_)) => e,
        other => FairvalError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Fairval {
    /// Start building a new `Fairval` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let fairval = fairval::Fairval::builder()
    ///     .with_connector(Arc::new(fairval_yfinance::YfConnector::try_new_default()?))
    ///     .with_connector(Arc::new(fairval_mock::MockConnector::new()))
    ///     .provider_timeout(Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> FairvalBuilder {
        FairvalBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FairvalConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fairval::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, FairvalError>
    where
        Fut: core::future::Future<Output = Result<T, FairvalError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(FairvalError::provider_timeout(connector_name, capability)))
    }

    /// Try eligible connectors in registration order until one succeeds.
    ///
    /// `call` returns `None` for connectors that lack the capability or the
    /// asset kind; those are skipped without counting as an attempt.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fairval::core::fetch_single",
            skip(self, call),
            fields(symbol = %inst.symbol(), capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        inst: &Instrument,
        capability: Capability,
        call: F,
    ) -> Result<T, FairvalError>
    where
        T: Send,
        F: Fn(Arc<dyn FairvalConnector>, Instrument) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, FairvalError>> + Send,
    {
        let mut errors: Vec<FairvalError> = Vec::new();
        let mut attempted_any = false;

        for c in &self.connectors {
            let Some(fut) = call(c.clone(), inst.clone()) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability.as_str(),
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (FairvalError::NotFound { .. } | FairvalError::ProviderTimeout { .. })) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "provider miss; falling back");
                    errors.push(e);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "provider failed; falling back");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{} for {}", capability.not_found_label(), inst.symbol())),
        ))
    }
}
