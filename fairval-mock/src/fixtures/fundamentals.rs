use chrono::NaiveDate;
use fairval_core::{BalanceSheetRow, CashflowRow, FairvalError, IncomeStatementRow, Period};

use super::usd;

const M: i64 = 1_000_000;

/// One fiscal year of fixture data, amounts in millions of USD.
struct Year {
    year: i32,
    revenue: Option<i64>,
    net_income: Option<i64>,
    free_cash_flow: Option<i64>,
    operating_cashflow: Option<i64>,
    capex: Option<i64>,
}

const fn y(year: i32, revenue: i64, net_income: i64, fcf: i64) -> Year {
    Year {
        year,
        revenue: Some(revenue),
        net_income: Some(net_income),
        free_cash_flow: Some(fcf),
        operating_cashflow: None,
        capex: None,
    }
}

// Eleven years so that a ten-year trailing CAGR has a starting point.
const PYPL: &[Year] = &[
    y(2014, 8_025, 419, 1_700),
    y(2015, 9_248, 1_228, 2_546),
    Year {
        year: 2016,
        revenue: Some(10_842),
        net_income: Some(1_401),
        free_cash_flow: None,
        operating_cashflow: Some(3_158),
        capex: Some(-669),
    },
    y(2017, 13_094, 1_795, 2_736),
    y(2018, 15_451, 2_057, 4_744),
    y(2019, 17_772, 2_459, 3_639),
    y(2020, 21_454, 4_202, 4_889),
    y(2021, 25_371, 4_169, 5_119),
    y(2022, 27_518, 2_419, 5_105),
    y(2023, 28_600, 4_246, 4_220),
    y(2024, 29_700, 4_147, 6_766),
];

const KO: &[Year] = &[
    y(2020, 33_014, 7_747, 8_667),
    y(2021, 38_655, 9_771, 11_258),
    y(2022, 43_004, 9_542, 9_534),
    y(2023, 45_754, 10_714, 9_747),
    y(2024, 47_061, 10_631, 4_741),
];

const NOSHARES: &[Year] = &[y(2023, 1_000, 50, 40), y(2024, 1_100, 60, 45)];

fn years(s: &str) -> Option<&'static [Year]> {
    match s {
        "PYPL" => Some(PYPL),
        "KO" => Some(KO),
        "NOSHARES" | "NOPRICE" => Some(NOSHARES),
        _ => None,
    }
}

fn shares(s: &str) -> Option<u64> {
    match s {
        "PYPL" => Some(1_000_000_000),
        "KO" => Some(4_310_000_000),
        "NOPRICE" => Some(40_000_000),
        _ => None,
    }
}

fn period(year: i32) -> Result<Period, FairvalError> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .map(Period::Date)
        .ok_or_else(|| FairvalError::Data(format!("invalid fixture year {year}")))
}

fn millions(v: Option<i64>) -> Result<Option<fairval_core::Money>, FairvalError> {
    v.map(|m| usd(m * M)).transpose()
}

pub fn income_stmt_by_symbol(s: &str) -> Result<Option<Vec<IncomeStatementRow>>, FairvalError> {
    years(s)
        .map(|ys| {
            ys.iter()
                .map(|yr| {
                    Ok(IncomeStatementRow {
                        period: period(yr.year)?,
                        total_revenue: millions(yr.revenue)?,
                        gross_profit: None,
                        operating_income: None,
                        net_income: millions(yr.net_income)?,
                    })
                })
                .collect()
        })
        .transpose()
}

pub fn cashflow_by_symbol(s: &str) -> Result<Option<Vec<CashflowRow>>, FairvalError> {
    // KO deliberately ships without a cash-flow statement.
    if s == "KO" {
        return Ok(None);
    }
    years(s)
        .map(|ys| {
            ys.iter()
                .map(|yr| {
                    Ok(CashflowRow {
                        period: period(yr.year)?,
                        operating_cashflow: millions(yr.operating_cashflow)?,
                        capital_expenditures: millions(yr.capex)?,
                        free_cash_flow: millions(yr.free_cash_flow)?,
                        net_income: millions(yr.net_income)?,
                    })
                })
                .collect()
        })
        .transpose()
}

pub fn balance_sheet_by_symbol(s: &str) -> Result<Option<Vec<BalanceSheetRow>>, FairvalError> {
    let Some(ys) = years(s) else {
        return Ok(None);
    };
    let Some(last) = ys.last() else {
        return Ok(Some(Vec::new()));
    };
    Ok(Some(vec![BalanceSheetRow {
        period: period(last.year)?,
        total_assets: None,
        total_liabilities: None,
        total_equity: None,
        cash: None,
        long_term_debt: None,
        shares_outstanding: shares(s),
    }]))
}
