//! Plain-text rendering of a [`ValuationReport`].

use std::fmt;

use fairval::{Estimate, ValuationReport, Verdict};

/// Human-readable view of a report, in the layout of the interactive tool.
pub struct TextReport<'a>(pub &'a ValuationReport);

fn percent(e: Estimate) -> String {
    e.value()
        .map_or_else(|| "n/a".to_string(), |v| format!("{:.1}%", v * 100.0))
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let v = &r.result;
        let years = r.assumptions.horizon_years;

        writeln!(f, "Results: {}", r.symbol)?;
        writeln!(f, "  Live Price   ${:.2}", r.quote.price)?;
        writeln!(
            f,
            "  Fair Value   ${:.2} ({:+.1}%)",
            v.blended_fair_value, v.percent_difference_from_price
        )?;
        let label = match v.verdict {
            Verdict::Undervalued => "UNDERVALUED",
            Verdict::Overvalued => "OVERVALUED",
        };
        writeln!(
            f,
            "{label} by {:.1}% based on your assumptions.",
            v.percent_difference_from_price.abs()
        )?;

        writeln!(f)?;
        writeln!(f, "Valuation Breakdown (value in {years} yrs)")?;
        writeln!(f, "  Future Revenue     ${:.1}B", v.future_revenue / 1e9)?;
        writeln!(f, "  Future EPS         ${:.2}", v.future_eps)?;
        writeln!(f, "  Future FCF/Share   ${:.2}", v.future_fcf_per_share)?;

        writeln!(f)?;
        writeln!(f, "Intrinsic Value Comparison")?;
        writeln!(
            f,
            "  Based on Earnings (P/E)      ${:.2}",
            v.intrinsic_value_by_earnings
        )?;
        writeln!(
            f,
            "  Based on Cash Flow (P/FCF)   ${:.2}",
            v.intrinsic_value_by_cashflow
        )?;

        if !r.history.rows.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Historical ({} annual periods)",
                r.history.periods_available
            )?;
            writeln!(
                f,
                "  {:<8}{:>14}{:>16}{:>16}",
                "Window", "Revenue CAGR", "Avg Net Margin", "Avg FCF Margin"
            )?;
            for row in &r.history.rows {
                writeln!(
                    f,
                    "  {:<8}{:>14}{:>16}{:>16}",
                    format!("{}y", row.window_years),
                    percent(row.revenue_cagr),
                    percent(row.average_net_margin),
                    percent(row.average_fcf_margin),
                )?;
            }
        }

        if !r.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings")?;
            for w in &r.warnings {
                writeln!(f, "  - {w}")?;
            }
        }
        Ok(())
    }
}
