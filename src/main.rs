//! depstale - dependency staleness auditor CLI
//!
//! Loads repository descriptors, audits each one for outdated dependencies,
//! prints a report, and optionally writes the index documents as JSON lines.

use clap::Parser;
use depstale::audit::Auditor;
use depstale::cli::CliArgs;
use depstale::output::{create_formatter, OutputConfig};
use depstale::sink::{IndexSink, JsonLinesSink};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let repositories = args.load_repositories()?;
    let auditor = Auditor::new(&args.github_config())?;

    let results = auditor.audit_all(&repositories, args.show_progress()).await;

    // Report to stdout
    let output_config = OutputConfig::from_cli(args.json, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&repositories, &results, &mut stdout)?;
    stdout.flush()?;

    // Hand the documents to the file sink when asked
    if let Some(path) = &args.ndjson {
        let mut sink = JsonLinesSink::create(path)?;
        sink.upsert(&results)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
