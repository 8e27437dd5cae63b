use fairval_core::Capability;

use crate::Fairval;
use crate::fairval_router_method;

impl Fairval {
    fairval_router_method! {
        /// Fetch income statement rows; set `quarterly = true` for quarterly cadence.
        ///
        /// Valuation uses the annual cadence. Some providers report trailing
        /// values or partial periods which are passed through.
        method: income_statement(inst: &fairval_core::Instrument, quarterly: bool) -> Vec<fairval_core::IncomeStatementRow>,
        accessor: as_income_statement_provider,
        capability: Capability::IncomeStatement,
        call: income_statement(inst, quarterly)
    }

    fairval_router_method! {
        /// Fetch balance sheet rows; set `quarterly = true` for quarterly cadence.
        method: balance_sheet(inst: &fairval_core::Instrument, quarterly: bool) -> Vec<fairval_core::BalanceSheetRow>,
        accessor: as_balance_sheet_provider,
        capability: Capability::BalanceSheet,
        call: balance_sheet(inst, quarterly)
    }

    fairval_router_method! {
        /// Fetch cashflow rows; set `quarterly = true` for quarterly cadence.
        ///
        /// Sign conventions follow the source and are not adjusted; capital
        /// expenditures are usually negative.
        method: cashflow(inst: &fairval_core::Instrument, quarterly: bool) -> Vec<fairval_core::CashflowRow>,
        accessor: as_cashflow_provider,
        capability: Capability::Cashflow,
        call: cashflow(inst, quarterly)
    }
}
