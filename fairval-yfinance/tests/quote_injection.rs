#![cfg(feature = "test-adapters")]

mod common;

use common::{Combo, equity, usd};
use fairval_core::{FairvalError, connector::QuoteProvider};
use fairval_yfinance::{YfConnector, adapter};
use yfinance_rs as yf;

#[tokio::test]
async fn quote_uses_injected_adapter() {
    let quotes = <dyn adapter::YfQuotes>::from_fn(|symbols| {
        assert_eq!(symbols, vec!["PYPL".to_string()]);
        Ok(vec![yf::core::Quote {
            instrument: equity("PYPL"),
            shortname: Some("PayPal Holdings, Inc.".into()),
            price: Some(usd("60.00")),
            previous_close: Some(usd("59.10")),
            exchange: None,
            market_state: None,
            day_volume: None,
        }])
    });
    let yf = YfConnector::from_adapter(&Combo {
        q: Some(quotes),
        f: None,
    });

    let q = yf.quote(&equity("PYPL")).await.unwrap();
    assert_eq!(q.instrument.symbol_str(), "PYPL");
    assert_eq!(
        q.price.as_ref().map(|m| m.amount().to_string()).as_deref(),
        Some("60.00")
    );
}

#[tokio::test]
async fn empty_batch_is_not_found() {
    let quotes = <dyn adapter::YfQuotes>::from_fn(|_| Ok(vec![]));
    let yf = YfConnector::from_adapter(&Combo {
        q: Some(quotes),
        f: None,
    });

    let err = yf.quote(&equity("ZZZZ")).await.unwrap_err();
    assert_eq!(err, FairvalError::not_found("quote for ZZZZ"));
}
