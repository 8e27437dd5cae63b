mod cli;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use fairval::{AssetKind, Fairval, FairvalConnector, Instrument};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    // Suggested: RUST_LOG=fairval=debug,fairval_yfinance=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let report = runtime.block_on(evaluate(cli))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::TextReport(&report));
    }
    Ok(())
}

async fn evaluate(cli: &Cli) -> Result<fairval::ValuationReport, CliError> {
    let symbol = cli.symbol.trim().to_ascii_uppercase();
    let instrument = Instrument::from_symbol(&symbol, AssetKind::Equity)
        .map_err(|e| CliError::Symbol(format!("{symbol}: {e}")))?;

    let fv = Fairval::builder()
        .with_connector(connector()?)
        .provider_timeout(cli.timeout())
        .history_windows(cli.windows.clone())
        .build()?;

    Ok(fv
        .evaluate(&instrument, &cli.assumptions(), &cli.inputs())
        .await?)
}

fn connector() -> Result<Arc<dyn FairvalConnector>, CliError> {
    if std::env::var_os("FAIRVAL_USE_MOCK").is_some() {
        tracing::debug!(target: "fairval::cli", "using mock connector");
        return Ok(Arc::new(fairval_mock::MockConnector::new()));
    }
    Ok(Arc::new(fairval_yfinance::YfConnector::try_new_default()?))
}
