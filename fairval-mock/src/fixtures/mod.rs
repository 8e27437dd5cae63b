pub mod fundamentals;
pub mod quotes;

use fairval_core::{Currency, FairvalError, IsoCurrency, Money};

/// Whole-dollar USD amount.
pub fn usd(amount: i64) -> Result<Money, FairvalError> {
    Money::from_canonical_str(&amount.to_string(), Currency::Iso(IsoCurrency::USD))
        .map_err(|e| FairvalError::Data(format!("fixture amount {amount}: {e}")))
}

/// Decimal USD amount such as "60.25".
pub fn usd_str(amount: &str) -> Result<Money, FairvalError> {
    Money::from_canonical_str(amount, Currency::Iso(IsoCurrency::USD))
        .map_err(|e| FairvalError::Data(format!("fixture amount {amount}: {e}")))
}
