use anyhow::Context;
use pnl_ledger::{orchestration::run_files, Config};

fn main() {
    // Logs go to stderr; stdout carries the run summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = try_main() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args_and_env(&args).context("Configuration error")?;

    let summary = run_files(&config).with_context(|| {
        format!("Failed to process ledger {}", config.input_path.display())
    })?;

    println!(
        "{} rows, {} sells realized, total profit/loss {}",
        summary.rows,
        summary.sells_realized,
        pnl_ledger::domain::format_cents(summary.total_profit_loss)
    );
    Ok(())
}
