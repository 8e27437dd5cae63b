use fairval_core::{AssetKind, Exchange, FairvalError, Instrument, Quote};

use super::usd_str;

struct QuoteFixture {
    symbol: &'static str,
    name: &'static str,
    price: Option<&'static str>,
    previous_close: &'static str,
    nasdaq: bool,
}

const QUOTES: &[QuoteFixture] = &[
    QuoteFixture {
        symbol: "PYPL",
        name: "PayPal Holdings, Inc.",
        price: Some("60.00"),
        previous_close: "59.40",
        nasdaq: true,
    },
    QuoteFixture {
        symbol: "KO",
        name: "Coca-Cola",
        price: Some("60.00"),
        previous_close: "59.50",
        nasdaq: false,
    },
    QuoteFixture {
        symbol: "NOSHARES",
        name: "No Share Count Corp",
        price: Some("25.00"),
        previous_close: "24.80",
        nasdaq: false,
    },
    QuoteFixture {
        symbol: "NOPRICE",
        name: "Halted Trading Inc.",
        price: None,
        previous_close: "12.00",
        nasdaq: true,
    },
];

pub fn by_symbol(s: &str) -> Result<Option<Quote>, FairvalError> {
    let Some(f) = QUOTES.iter().find(|f| f.symbol == s) else {
        return Ok(None);
    };
    let instrument = Instrument::from_symbol(f.symbol, AssetKind::Equity)
        .map_err(|e| FairvalError::InvalidArg(e.to_string()))?;
    Ok(Some(Quote {
        instrument,
        shortname: Some(f.name.to_string()),
        price: f.price.map(usd_str).transpose()?,
        previous_close: Some(usd_str(f.previous_close)?),
        exchange: Some(if f.nasdaq {
            Exchange::NASDAQ
        } else {
            Exchange::NYSE
        }),
        market_state: None,
        day_volume: None,
    }))
}
