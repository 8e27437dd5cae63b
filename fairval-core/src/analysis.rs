//! Trailing growth and margin statistics over look-back windows.
//!
//! Nothing here returns an error. Statistics the data cannot support come
//! back as [`Estimate::Unavailable`] and windows longer than the reported
//! history are listed in [`HistoricalSummary::insufficient_windows`].

use chrono::{Datelike, NaiveDate};

use crate::{Estimate, FinancialSeries, HistoricalSummary, Observation, TrailingRow};

/// Windows summarized when the caller does not choose any.
pub const DEFAULT_WINDOWS: [u32; 3] = [1, 5, 10];

/// Compound annual growth rate from `start` to `end` over `years`.
///
/// Requires `start > 0`, `end > 0` and `0 < years < 100`; otherwise the rate
/// is unavailable.
#[must_use]
pub fn compute_cagr(start: f64, end: f64, years: f64) -> Estimate {
    if !(start > 0.0 && end > 0.0 && years > 0.0 && years < 100.0) {
        return Estimate::Unavailable;
    }
    if !(start.is_finite() && end.is_finite()) {
        return Estimate::Unavailable;
    }
    Estimate::from_finite((end / start).powf(years.recip()) - 1.0)
}

/// Arithmetic mean of the last `window` margins.
///
/// Unavailable when `window` is zero or exceeds the number of margins.
#[must_use]
pub fn compute_average_margin(margins: &[f64], window: usize) -> Estimate {
    if window == 0 || margins.len() < window {
        return Estimate::Unavailable;
    }
    let tail = &margins[margins.len() - window..];
    #[allow(clippy::cast_precision_loss)]
    let mean = tail.iter().sum::<f64>() / window as f64;
    Estimate::from_finite(mean)
}

/// Point-wise `numerator / revenue` for periods present in both series.
///
/// Periods with zero revenue or a non-finite ratio are dropped. When either
/// input carries no values the result is a single `0.0` observation dated at
/// the latest known period (or `NaiveDate::MIN`); callers that need to tell
/// this apart from a measured margin should check the inputs first.
#[must_use]
pub fn derive_margin_series(numerator: &FinancialSeries, revenue: &FinancialSeries) -> FinancialSeries {
    if !has_values(numerator) || !has_values(revenue) {
        let period = numerator
            .last_period()
            .max(revenue.last_period())
            .unwrap_or(NaiveDate::MIN);
        return FinancialSeries::from_unordered(vec![Observation {
            period,
            value: Some(0.0),
        }]);
    }
    let points = numerator
        .present()
        .filter_map(|(period, n)| {
            let r = revenue.get(period)?;
            if r == 0.0 {
                return None;
            }
            let m = n / r;
            m.is_finite().then_some(Observation {
                period,
                value: Some(m),
            })
        })
        .collect();
    FinancialSeries::from_unordered(points)
}

/// CAGR from the value reported `years` fiscal years before the latest
/// reported period to the latest value.
///
/// Periods are matched by fiscal year, not by position. When the starting
/// year is absent from the series or carries no value, the rate is
/// unavailable.
#[must_use]
pub fn trailing_cagr(series: &FinancialSeries, years: u32) -> Estimate {
    let Some((end_period, end)) = series.latest() else {
        return Estimate::Unavailable;
    };
    let Some(start_year) = window_start_year(end_period, years) else {
        return Estimate::Unavailable;
    };
    match value_in_year(series, start_year) {
        Some(start) => compute_cagr(start, end, f64::from(years)),
        None => Estimate::Unavailable,
    }
}

/// Build the trailing CAGR/margin table for the requested windows.
///
/// Windows are anchored at the latest reported revenue period and span
/// fiscal years. A margin average needs a measured margin in every year of
/// its window. A window is listed as insufficient when the reported revenue
/// history does not reach back to its starting year.
#[must_use]
pub fn summarize(
    revenue: &FinancialSeries,
    net_income: &FinancialSeries,
    free_cash_flow: &FinancialSeries,
    windows: &[u32],
) -> HistoricalSummary {
    let net_margins = measured_margins(net_income, revenue);
    let fcf_margins = measured_margins(free_cash_flow, revenue);
    let periods_available = revenue.present().count();
    let latest = revenue.latest();
    let earliest_year = revenue.present().next().map(|(p, _)| p.year());

    let rows = windows
        .iter()
        .map(|&w| {
            let first_year = latest
                .and_then(|(p, _)| window_start_year(p, w))
                .map(|y| y + 1);
            TrailingRow {
                window_years: w,
                revenue_cagr: trailing_cagr(revenue, w),
                average_net_margin: window_average(&net_margins, first_year, w),
                average_fcf_margin: window_average(&fcf_margins, first_year, w),
            }
        })
        .collect();
    let insufficient_windows = windows
        .iter()
        .copied()
        .filter(|&w| {
            w > 0
                && match (latest, earliest_year) {
                    (Some((p, _)), Some(earliest)) => {
                        window_start_year(p, w).is_none_or(|start| start < earliest)
                    }
                    _ => true,
                }
        })
        .collect();

    HistoricalSummary {
        rows,
        latest_revenue: latest.map(|(_, v)| v),
        periods_available,
        insufficient_windows,
    }
}

// Fiscal year `years` before `latest`; `None` for a zero or oversized window.
fn window_start_year(latest: NaiveDate, years: u32) -> Option<i32> {
    if years == 0 {
        return None;
    }
    latest.year().checked_sub(i32::try_from(years).ok()?)
}

fn value_in_year(series: &FinancialSeries, year: i32) -> Option<f64> {
    series
        .points()
        .iter()
        .rev()
        .find(|p| p.period.year() == year)
        .and_then(|p| p.value)
}

// Margins dated from `first_year` on, averaged only when all `window` years are present.
fn window_average(margins: &FinancialSeries, first_year: Option<i32>, window: u32) -> Estimate {
    let Some(first_year) = first_year else {
        return Estimate::Unavailable;
    };
    let in_window: Vec<f64> = margins
        .present()
        .filter(|(p, _)| p.year() >= first_year)
        .map(|(_, v)| v)
        .collect();
    compute_average_margin(&in_window, window as usize)
}

fn has_values(series: &FinancialSeries) -> bool {
    series.present().next().is_some()
}

// The single-zero fallback of `derive_margin_series` is not a measurement.
fn measured_margins(numerator: &FinancialSeries, revenue: &FinancialSeries) -> FinancialSeries {
    if !has_values(numerator) || !has_values(revenue) {
        return FinancialSeries::new();
    }
    derive_margin_series(numerator, revenue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual(values: &[Option<f64>]) -> FinancialSeries {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| Observation {
                period: NaiveDate::from_ymd_opt(2015 + i32::try_from(i).unwrap(), 12, 31).unwrap(),
                value: *v,
            })
            .collect();
        FinancialSeries::try_from_points(points).unwrap()
    }

    fn approx(e: Estimate, want: f64) {
        let got = e.value().expect("estimate should be available");
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    #[test]
    fn cagr_preconditions() {
        approx(compute_cagr(100.0, 121.0, 2.0), 0.1);
        assert!(compute_cagr(0.0, 10.0, 2.0).is_unavailable());
        assert!(compute_cagr(10.0, -1.0, 2.0).is_unavailable());
        assert!(compute_cagr(10.0, 20.0, 0.0).is_unavailable());
        assert!(compute_cagr(10.0, 20.0, 100.0).is_unavailable());
    }

    #[test]
    fn average_margin_uses_tail() {
        approx(compute_average_margin(&[0.5, 0.1, 0.2, 0.3], 3), 0.2);
        assert!(compute_average_margin(&[0.1], 2).is_unavailable());
        assert!(compute_average_margin(&[0.1], 0).is_unavailable());
    }

    #[test]
    fn margin_series_drops_zero_revenue_and_misaligned_periods() {
        let revenue = annual(&[Some(100.0), Some(0.0), Some(200.0), None]);
        let income = annual(&[Some(10.0), Some(5.0), Some(30.0), Some(7.0)]);
        let m = derive_margin_series(&income, &revenue);
        assert_eq!(m.values(), vec![0.1, 0.15]);
    }

    #[test]
    fn margin_series_fallback_is_single_zero() {
        let revenue = annual(&[Some(100.0), Some(120.0)]);
        let m = derive_margin_series(&FinancialSeries::new(), &revenue);
        assert_eq!(m.values(), vec![0.0]);
        assert_eq!(m.last_period(), revenue.last_period());

        let m = derive_margin_series(&FinancialSeries::new(), &FinancialSeries::new());
        assert_eq!(m.last_period(), Some(NaiveDate::MIN));
    }

    #[test]
    fn trailing_cagr_matches_start_by_fiscal_year() {
        // 2015..=2018 with 2016 unreported.
        let revenue = annual(&[Some(100.0), None, Some(110.0), Some(121.0)]);
        approx(trailing_cagr(&revenue, 1), 0.1);
        assert!(trailing_cagr(&revenue, 2).is_unavailable());
        approx(trailing_cagr(&revenue, 3), 1.21_f64.cbrt() - 1.0);
        assert!(trailing_cagr(&revenue, 4).is_unavailable());
        assert!(trailing_cagr(&revenue, 0).is_unavailable());
    }

    #[test]
    fn trailing_cagr_ignores_trailing_unreported_period() {
        let revenue = annual(&[Some(100.0), Some(110.0), None]);
        approx(trailing_cagr(&revenue, 1), 0.1);
        assert!(trailing_cagr(&FinancialSeries::new(), 1).is_unavailable());
    }

    #[test]
    fn summary_windows_follow_dates_across_gaps() {
        // 2015..=2018; revenue missing in 2016 so that year has no margin.
        let revenue = annual(&[Some(100.0), None, Some(110.0), Some(121.0)]);
        let income = annual(&[Some(10.0), Some(5.0), Some(11.0), Some(24.2)]);
        let s = summarize(&revenue, &income, &FinancialSeries::new(), &[1, 2, 3, 5]);

        assert_eq!(s.periods_available, 3);
        assert_eq!(s.insufficient_windows, vec![5]);

        approx(s.rows[0].average_net_margin, 0.2);
        approx(s.rows[1].average_net_margin, 0.15);
        assert!(s.rows[1].revenue_cagr.is_unavailable());
        // The 3-year window spans 2016..=2018 and 2016 has no measured margin.
        assert!(s.rows[2].average_net_margin.is_unavailable());
        approx(s.rows[2].revenue_cagr, 1.21_f64.cbrt() - 1.0);
        assert!(s.rows[3].revenue_cagr.is_unavailable());
    }

    #[test]
    fn summary_marks_short_history() {
        let revenue = annual(&[Some(100.0), Some(110.0), Some(121.0)]);
        let income = annual(&[Some(10.0), Some(11.0), Some(24.2)]);
        let s = summarize(&revenue, &income, &FinancialSeries::new(), &DEFAULT_WINDOWS);

        assert_eq!(s.periods_available, 3);
        assert_eq!(s.latest_revenue, Some(121.0));
        assert_eq!(s.insufficient_windows, vec![5, 10]);

        let one = s.rows[0];
        approx(one.revenue_cagr, 0.1);
        approx(one.average_net_margin, 0.2);
        assert!(one.average_fcf_margin.is_unavailable());
        assert!(s.rows[1].revenue_cagr.is_unavailable());
        assert!(s.rows[2].average_net_margin.is_unavailable());
    }
}
