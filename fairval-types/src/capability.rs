use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels used for routing, errors, and telemetry.
///
/// Each variant maps to one orchestrator fetch method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Point-in-time quote for a single instrument.
    Quote,
    /// Fundamentals: income statement rows.
    IncomeStatement,
    /// Fundamentals: balance sheet rows.
    BalanceSheet,
    /// Fundamentals: cashflow rows.
    Cashflow,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::IncomeStatement => "income-statement",
            Self::BalanceSheet => "balance-sheet",
            Self::Cashflow => "cashflow",
        }
    }

    /// Noun used when reporting a missing resource, e.g. "fundamentals for AAPL".
    #[must_use]
    pub const fn not_found_label(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::IncomeStatement | Self::BalanceSheet | Self::Cashflow => "fundamentals",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
