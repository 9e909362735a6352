use std::path::Path;

use anyhow::Result;

use trade_stats::channel::{CsvSink, CsvSource};
use trade_stats::config::Config;
use trade_stats::error::AppError;
use trade_stats::stats::TradeFileStats;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_path(Path::new(&path)),
        None => Config::load(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        input = %config.files.input_path.display(),
        output = %config.files.output_path.display(),
        delimiter = %config.files.delimiter,
        "Starting trade-stats"
    );

    let mut source = CsvSource::open(&config.files.input_path, config.files.delimiter);
    let mut sink = CsvSink::create(&config.files.output_path, config.files.delimiter);

    let mut stats = TradeFileStats::new();
    match stats.load_data(&mut source) {
        Ok(_) => {
            stats.print_stats(&mut sink);
        }
        Err(AppError::EmptyData) => {
            tracing::warn!("No trade data to print, check the input file");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
