use fairval_core::{
    Assumptions, BaseRevenueSource, FairvalError, Instrument, ValuationInputs, ValuationReport,
    extract, summarize,
};

use crate::Fairval;

fn positive_override(value: Option<f64>, what: &str) -> Result<Option<f64>, FairvalError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(FairvalError::InvalidArg(format!(
            "{what} override must be positive, got {v}"
        ))),
        other => Ok(other),
    }
}

fn with_symbol(e: FairvalError, symbol: &str) -> FairvalError {
    match e {
        FairvalError::MissingData { field } => FairvalError::missing(format!("{field} for {symbol}")),
        other => other,
    }
}

impl Fairval {
    /// Value one instrument under the given assumptions.
    ///
    /// The quote and the annual income statement are essential: failing to
    /// fetch either fails the evaluation. The cash-flow statement is optional
    /// and its failure becomes a report warning. The balance sheet is only
    /// requested when no share count override is given, and then a failure
    /// to fetch it fails the evaluation with the provider error.
    ///
    /// # Errors
    /// - `InvalidArg` for invalid assumptions or non-positive overrides.
    /// - Routing errors (`NotFound`, `AllProvidersFailed`, ...) for the quote,
    ///   the income statement, or the balance sheet when it is needed.
    /// - `MissingData` when price, shares outstanding, or base revenue are
    ///   absent from otherwise successful responses.
    /// - `Domain` from the projection and comparison steps.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "fairval::evaluate",
            skip(self, assumptions, inputs),
            fields(symbol = %inst.symbol()),
        )
    )]
    pub async fn evaluate(
        &self,
        inst: &Instrument,
        assumptions: &Assumptions,
        inputs: &ValuationInputs,
    ) -> Result<ValuationReport, FairvalError> {
        assumptions.validate()?;
        let base_override = positive_override(inputs.base_revenue, "base revenue")?;
        let shares_override = positive_override(inputs.shares_outstanding, "shares outstanding")?;
        let symbol = inst.symbol_str().to_string();
        let mut warnings: Vec<String> = Vec::new();

        let quote = self.quote(inst).await?;
        let income = self.income_statement(inst, false).await?;

        let cashflow = match self.cashflow(inst, false).await {
            Ok(rows) => rows,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "fairval::evaluate", error = %e, "cash-flow statement unavailable");
                warnings.push(format!("cash-flow statement unavailable: {e}"));
                Vec::new()
            }
        };

        // Without an override the balance sheet is the only share source.
        let shares = match shares_override {
            Some(s) => Some(s),
            None => extract::shares_outstanding(&self.balance_sheet(inst, false).await?),
        };

        let snapshot = extract::snapshot(
            extract::quote_price(&quote),
            shares,
            extract::quote_currency(&quote),
        )
        .map_err(|e| with_symbol(e, &symbol))?;

        let revenue = extract::revenue_series(&income);
        let net_income = extract::net_income_series(&income);
        let fcf = extract::free_cash_flow_series(&cashflow);
        let history = summarize(&revenue, &net_income, &fcf, &self.cfg.history_windows);
        for w in &history.insufficient_windows {
            warnings.push(format!(
                "{w}-year trailing figures unavailable: {} annual periods reported",
                history.periods_available
            ));
        }

        let (base_revenue, base_revenue_source) = match base_override {
            Some(b) => (b, BaseRevenueSource::UserInput),
            None => match history.latest_revenue.filter(|r| *r > 0.0) {
                Some(r) => (r, BaseRevenueSource::LatestReported),
                None => return Err(FairvalError::missing(format!("revenue for {symbol}"))),
            },
        };

        let result = fairval_core::evaluate(base_revenue, &snapshot, assumptions)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "fairval::evaluate",
            fair_value = result.blended_fair_value,
            verdict = %result.verdict,
            "valuation complete"
        );

        Ok(ValuationReport {
            symbol,
            quote: snapshot,
            base_revenue,
            base_revenue_source,
            assumptions: *assumptions,
            result,
            history,
            warnings,
        })
    }
}
