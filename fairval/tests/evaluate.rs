mod helpers;

use std::sync::Arc;

use fairval::{Assumptions, BaseRevenueSource, Fairval, ValuationInputs, Verdict};
use fairval_core::{AssetKind, Estimate, FairvalError};
use fairval_mock::MockConnector as FixtureConnector;
use helpers::{MockConnector, PYPL, income_rows, instrument, quote_fixture, shares_row};

fn fixtures() -> Fairval {
    Fairval::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn pypl_fixture_end_to_end() {
    let report = fixtures()
        .evaluate(
            &instrument(PYPL, AssetKind::Equity),
            &Assumptions::default(),
            &ValuationInputs::default(),
        )
        .await
        .unwrap();

    assert_eq!(report.base_revenue, 29.7e9);
    assert_eq!(report.base_revenue_source, BaseRevenueSource::LatestReported);
    assert_eq!(report.quote.price, 60.0);
    assert_eq!(report.quote.shares_outstanding, 1e9);
    assert!((report.result.intrinsic_value_by_earnings - 38.53).abs() < 0.01);
    assert_eq!(report.result.verdict, Verdict::Overvalued);

    assert_eq!(report.history.periods_available, 11);
    assert!(report.history.insufficient_windows.is_empty());
    assert_eq!(report.history.rows.len(), 3);
    assert!(matches!(report.history.rows[2].revenue_cagr, Estimate::Value(g) if g > 0.1));
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[tokio::test]
async fn missing_cashflow_is_a_warning() {
    let report = fixtures()
        .evaluate(
            &instrument("KO", AssetKind::Equity),
            &Assumptions::default(),
            &ValuationInputs::default(),
        )
        .await
        .unwrap();

    assert!(report.warnings.iter().any(|w| w.contains("cash-flow")));
    assert!(report.history.rows[0].average_fcf_margin.is_unavailable());
    assert_eq!(report.history.insufficient_windows, vec![5, 10]);
}

#[tokio::test]
async fn missing_shares_fail_explicitly() {
    let err = fixtures()
        .evaluate(
            &instrument("NOSHARES", AssetKind::Equity),
            &Assumptions::default(),
            &ValuationInputs::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(err, FairvalError::missing("shares outstanding for NOSHARES"));
}

#[tokio::test]
async fn share_override_rescues_missing_count() {
    let inputs = ValuationInputs {
        shares_outstanding: Some(50e6),
        base_revenue: Some(2e9),
    };
    let report = fixtures()
        .evaluate(
            &instrument("NOSHARES", AssetKind::Equity),
            &Assumptions::default(),
            &inputs,
        )
        .await
        .unwrap();
    assert_eq!(report.quote.shares_outstanding, 50e6);
    assert_eq!(report.base_revenue_source, BaseRevenueSource::UserInput);
}

#[tokio::test]
async fn missing_price_fails_explicitly() {
    let err = fixtures()
        .evaluate(
            &instrument("NOPRICE", AssetKind::Equity),
            &Assumptions::default(),
            &ValuationInputs::default(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FairvalError::MissingData { field } if field.starts_with("current price")));
}

#[tokio::test]
async fn invalid_assumptions_fail_before_any_fetch() {
    let c = MockConnector::builder()
        .with_quote_fn(|_| panic!("no fetch expected"))
        .build();
    let fv = Fairval::builder().with_connector(c).build().unwrap();
    let bad = Assumptions {
        horizon_years: 11,
        ..Assumptions::default()
    };
    let err = fv
        .evaluate(&instrument(PYPL, AssetKind::Equity), &bad, &ValuationInputs::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FairvalError::InvalidArg(_)));
}

#[tokio::test]
async fn balance_sheet_failure_surfaces_the_provider_error() {
    let c = MockConnector::builder()
        .with_quote_fn(|i| Ok(quote_fixture(i, Some("20"))))
        .with_income_statement_fn(|_, _| {
            Ok(income_rows(&[(2023, "1000000000", "100000000")]))
        })
        .with_balance_sheet_fn(|_, _| Err(FairvalError::Other("down".into())))
        .build();
    let fv = Fairval::builder().with_connector(c).build().unwrap();

    let err = fv
        .evaluate(
            &instrument(PYPL, AssetKind::Equity),
            &Assumptions::default(),
            &ValuationInputs::default(),
        )
        .await
        .unwrap_err();
    assert!(
        !matches!(err, FairvalError::MissingData { .. }),
        "root cause replaced by {err:?}"
    );
    assert!(err.to_string().contains("down"), "{err}");
    let flat = err.flatten();
    assert!(matches!(flat.as_slice(), [FairvalError::Connector { .. }]));
}

#[tokio::test]
async fn balance_sheet_failure_is_irrelevant_with_a_shares_override() {
    let c = MockConnector::builder()
        .with_quote_fn(|i| Ok(quote_fixture(i, Some("20"))))
        .with_income_statement_fn(|_, _| {
            Ok(income_rows(&[(2023, "1000000000", "100000000")]))
        })
        .with_balance_sheet_fn(|_, _| Err(FairvalError::Other("down".into())))
        .build();
    let fv = Fairval::builder().with_connector(c).build().unwrap();

    let inputs = ValuationInputs {
        base_revenue: None,
        shares_outstanding: Some(1e8),
    };
    let report = fv
        .evaluate(&instrument(PYPL, AssetKind::Equity), &Assumptions::default(), &inputs)
        .await
        .unwrap();
    assert!((report.quote.shares_outstanding - 1e8).abs() < 1.0);
    assert!(report.warnings.iter().all(|w| !w.contains("balance sheet")));
}

#[tokio::test]
async fn scripted_connector_values_with_latest_revenue() {
    let c = MockConnector::builder()
        .with_quote_fn(|i| Ok(quote_fixture(i, Some("10"))))
        .with_income_statement_fn(|_, _| {
            Ok(income_rows(&[
                (2024, "1100000000", "110000000"),
                (2023, "1000000000", "90000000"),
            ]))
        })
        .with_balance_sheet_fn(|_, _| Ok(vec![shares_row(2024, Some(100_000_000))]))
        .build();
    let fv = Fairval::builder()
        .with_connector(c)
        .history_windows(vec![1])
        .build()
        .unwrap();

    let report = fv
        .evaluate(
            &instrument(PYPL, AssetKind::Equity),
            &Assumptions::default(),
            &ValuationInputs::default(),
        )
        .await
        .unwrap();
    assert_eq!(report.base_revenue, 1.1e9);
    assert!(matches!(report.history.rows[0].revenue_cagr, Estimate::Value(g) if (g - 0.1).abs() < 1e-12));
    // no cashflow provider registered
    assert!(report.warnings.iter().any(|w| w.contains("unsupported")));
}
