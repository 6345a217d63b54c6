mod engine;
mod insights;
mod loader;
mod models;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::analyze;
use crate::insights::{highlights, Highlight, Insights};

/// The document written to stdout: the raw insights plus the card deck built from them.
#[derive(Serialize)]
struct WrappedReport<'a> {
    insights: &'a Insights,
    highlights: Vec<Highlight>
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: shopping-wrapped [input].json [log_level:optional] > [output].json");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let dataset = loader::load_dataset(path).await?;
    let insights = analyze(&dataset)?;
    let duration = timer.elapsed();

    info!("Analysed {} purchases in: {duration:?}", dataset.len());

    write_report_to_stdout(&insights)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(insights: &Insights) -> Result<()> {
    let report = WrappedReport {
        insights,
        highlights: highlights(insights)
    };

    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, &report)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
