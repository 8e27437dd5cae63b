#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use fairval_core::{Currency, Instrument, IsoCurrency, Money, Period};
use fairval_yfinance::adapter;

pub struct Combo {
    pub q: Option<Arc<dyn adapter::YfQuotes>>,
    pub f: Option<Arc<dyn adapter::YfFundamentals>>,
}

impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_quotes(&self) -> Arc<dyn adapter::YfQuotes> {
        self.q.clone().unwrap_or_else(|| {
            <dyn adapter::YfQuotes>::from_fn(|_| Err(fairval_core::FairvalError::unsupported("quote")))
        })
    }
    fn clone_arc_fundamentals(&self) -> Arc<dyn adapter::YfFundamentals> {
        match &self.f {
            Some(f) => f.clone(),
            None => <dyn adapter::YfFundamentals>::from_fns(
                |_s, _q| Err(fairval_core::FairvalError::unsupported("income")),
                |_s, _q| Err(fairval_core::FairvalError::unsupported("balance")),
                |_s, _q| Err(fairval_core::FairvalError::unsupported("cashflow")),
            ),
        }
    }
}

pub fn usd(amount: &str) -> Money {
    Money::from_canonical_str(amount, Currency::Iso(IsoCurrency::USD)).unwrap()
}

pub fn fy(year: i32) -> Period {
    Period::Date(NaiveDate::from_ymd_opt(year, 12, 31).unwrap())
}

pub fn equity(symbol: &str) -> Instrument {
    Instrument::from_symbol(symbol, fairval_core::AssetKind::Equity).expect("valid test instrument")
}
