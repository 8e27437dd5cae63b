#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use chrono::NaiveDate;
use fairval_core::{
    AssetKind, BalanceSheetRow, Currency, IncomeStatementRow, Instrument, IsoCurrency, Money,
    Period, Quote,
};

pub const PYPL: &str = "PYPL";
pub const MSFT: &str = "MSFT";

/// Build a USD Money amount without unwrap noise in tests.
pub fn usd(amount: &str) -> Money {
    Money::from_canonical_str(amount, Currency::Iso(IsoCurrency::USD)).unwrap()
}

/// Construct an `Instrument` for test usage with infallible expectations.
pub fn instrument(symbol: &str, kind: AssetKind) -> Instrument {
    Instrument::from_symbol(symbol, kind).expect("valid static test symbol")
}

/// Fiscal year-end period.
pub fn fy(year: i32) -> Period {
    Period::Date(NaiveDate::from_ymd_opt(year, 12, 31).expect("valid date"))
}

/// Quote with only the instrument and price populated.
pub fn quote_fixture(inst: &Instrument, price: Option<&str>) -> Quote {
    Quote {
        instrument: inst.clone(),
        shortname: None,
        price: price.map(usd),
        previous_close: None,
        exchange: None,
        market_state: None,
        day_volume: None,
    }
}

/// Income statement rows from `(year, revenue, net income)` in whole dollars.
pub fn income_rows(rows: &[(i32, &str, &str)]) -> Vec<IncomeStatementRow> {
    rows.iter()
        .map(|(y, rev, ni)| IncomeStatementRow {
            period: fy(*y),
            total_revenue: Some(usd(rev)),
            gross_profit: None,
            operating_income: None,
            net_income: Some(usd(ni)),
        })
        .collect()
}

/// Single balance sheet row carrying only a share count.
pub fn shares_row(year: i32, shares: Option<u64>) -> BalanceSheetRow {
    BalanceSheetRow {
        period: fy(year),
        total_assets: None,
        total_liabilities: None,
        total_equity: None,
        cash: None,
        long_term_debt: None,
        shares_outstanding: shares,
    }
}
