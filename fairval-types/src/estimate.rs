use serde::{Deserialize, Serialize};

/// A historical statistic that is either measured or unavailable.
///
/// `Unavailable` means the inputs could not support the statistic (too few
/// periods, a non-positive endpoint). It is distinct from a measured zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    /// A measured value.
    Value(f64),
    /// Not enough usable data to compute the statistic.
    #[default]
    Unavailable,
}

impl Estimate {
    /// Wrap a computed value, treating non-finite results as unavailable.
    #[must_use]
    pub const fn from_finite(v: f64) -> Self {
        if v.is_finite() {
            Self::Value(v)
        } else {
            Self::Unavailable
        }
    }

    /// The measured value, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    /// Legacy view that reports an unavailable statistic as 0.0.
    #[must_use]
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// Returns true when the statistic could not be computed.
    #[must_use]
    pub const fn is_unavailable(self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl From<Option<f64>> for Estimate {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Unavailable, Self::from_finite)
    }
}
