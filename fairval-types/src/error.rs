use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the fairval workspace.
///
/// Covers boundary validation of provider payloads (`MissingData`), violated
/// mathematical preconditions (`Domain`), bad user input, and the
/// provider-tagged failures produced while routing requests across connectors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FairvalError {
    /// An essential field (price, shares outstanding, revenue) is absent or zero.
    #[error("missing data: {field}")]
    MissingData {
        /// Name of the missing field, e.g. "shares outstanding for PYPL".
        field: String,
    },

    /// A mathematical precondition was violated (rate <= -100%, price <= 0, ...).
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data (unusable rows, bad amounts).
    #[error("data issue: {0}")]
    Data(String),

    /// The requested capability is not implemented by any eligible connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "cashflow").
        capability: String,
    },

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "quote for AAPL".
        what: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "quote", "income-statement").
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<FairvalError>),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl FairvalError {
    /// Helper: build a `MissingData` error naming the absent field.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingData {
            field: field.into(),
        }
    }

    /// Helper: build a `Domain` error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and benign not-found conditions are not actionable.
    /// Aggregates are classified by their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_unwraps_nested_aggregates() {
        let nested = FairvalError::AllProvidersFailed(vec![
            FairvalError::not_found("quote for X"),
            FairvalError::AllProvidersFailed(vec![FairvalError::connector("yf", "boom")]),
        ]);
        let flat = nested.flatten();
        assert_eq!(flat.len(), 2);
        assert!(matches!(flat[1], FairvalError::Connector { .. }));
    }

    #[test]
    fn not_found_only_aggregate_is_not_actionable() {
        let e = FairvalError::AllProvidersFailed(vec![
            FairvalError::not_found("a"),
            FairvalError::unsupported("cashflow"),
        ]);
        assert!(!e.is_actionable());
        assert!(FairvalError::missing("price").is_actionable());
    }
}
