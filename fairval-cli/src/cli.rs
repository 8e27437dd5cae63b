//! Command-line arguments for the `fairval` binary.
//!
//! Percent flags are taken as percentages (`--growth 6` is 6%) and converted
//! to fractions before they reach the valuation engine.

use std::time::Duration;

use clap::Parser;
use fairval::{Assumptions, ValuationInputs};

/// Estimate a stock's intrinsic value from projected revenue, margins, and
/// terminal multiples.
#[derive(Debug, Parser)]
#[command(name = "fairval", version, about)]
pub struct Cli {
    /// Ticker symbol, e.g. PYPL.
    pub symbol: String,

    /// Current annual revenue in billions. Defaults to the latest reported revenue.
    #[arg(long, value_name = "BILLIONS")]
    pub revenue: Option<f64>,

    /// Projected annual revenue growth (%).
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    pub growth: f64,

    /// Target net profit margin (%).
    #[arg(long, default_value_t = 15.0)]
    pub net_margin: f64,

    /// Target free-cash-flow margin (%).
    #[arg(long, default_value_t = 18.0)]
    pub fcf_margin: f64,

    /// Required annual return used for discounting (%).
    #[arg(long, default_value_t = 12.0, allow_negative_numbers = true)]
    pub required_return: f64,

    /// Years to project.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub years: u32,

    /// Target P/E multiple at the end of the horizon.
    #[arg(long, default_value_t = 15.0)]
    pub pe: f64,

    /// Target P/FCF multiple at the end of the horizon.
    #[arg(long, default_value_t = 18.0)]
    pub pfcf: f64,

    /// Shares outstanding. Defaults to the latest balance sheet count.
    #[arg(long)]
    pub shares: Option<f64>,

    /// Look-back windows (years) for the historical table.
    #[arg(long, value_delimiter = ',', default_values_t = [1u32, 5, 10])]
    pub windows: Vec<u32>,

    /// Per-provider request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Print the full report as pretty JSON.
    #[arg(long)]
    pub json: bool,
}

fn fraction(percent: f64) -> f64 {
    percent / 100.0
}

impl Cli {
    pub fn assumptions(&self) -> Assumptions {
        Assumptions {
            revenue_growth_rate: fraction(self.growth),
            target_net_margin: fraction(self.net_margin),
            target_fcf_margin: fraction(self.fcf_margin),
            required_return: fraction(self.required_return),
            horizon_years: self.years,
            target_pe_multiple: self.pe,
            target_pfcf_multiple: self.pfcf,
        }
    }

    pub fn inputs(&self) -> ValuationInputs {
        ValuationInputs {
            base_revenue: self.revenue.map(|b| b * 1e9),
            shares_outstanding: self.shares,
        }
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_assumptions() {
        let cli = Cli::try_parse_from(["fairval", "PYPL"]).unwrap();
        let a = cli.assumptions();
        let d = Assumptions::default();
        assert!((a.revenue_growth_rate - d.revenue_growth_rate).abs() < 1e-12);
        assert!((a.target_net_margin - d.target_net_margin).abs() < 1e-12);
        assert!((a.target_fcf_margin - d.target_fcf_margin).abs() < 1e-12);
        assert!((a.required_return - d.required_return).abs() < 1e-12);
        assert_eq!(a.horizon_years, d.horizon_years);
        assert_eq!(cli.windows, vec![1, 5, 10]);
        assert_eq!(cli.inputs(), ValuationInputs::default());
    }

    #[test]
    fn revenue_is_read_in_billions() {
        let cli = Cli::try_parse_from(["fairval", "PYPL", "--revenue", "29.7", "--shares", "1e9"])
            .unwrap();
        let inputs = cli.inputs();
        assert!((inputs.base_revenue.unwrap() - 29.7e9).abs() < 1.0);
        assert_eq!(inputs.shares_outstanding, Some(1e9));
    }

    #[test]
    fn negative_growth_and_window_list_parse() {
        let cli = Cli::try_parse_from(["fairval", "KO", "--growth", "-3", "--windows", "1,3"])
            .unwrap();
        assert!((cli.assumptions().revenue_growth_rate + 0.03).abs() < 1e-12);
        assert_eq!(cli.windows, vec![1, 3]);
    }

    #[test]
    fn years_outside_range_are_rejected() {
        assert!(Cli::try_parse_from(["fairval", "PYPL", "--years", "11"]).is_err());
        assert!(Cli::try_parse_from(["fairval", "PYPL", "--years", "0"]).is_err());
    }
}
