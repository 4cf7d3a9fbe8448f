//! # massresolve
//!
//! Bulk DNS resolver: reads hostnames, keeps a bounded window of queries in
//! flight and prints every matching answer as `<name> <value> <ttl>`.

mod bootstrap;
mod di;

use bootstrap::logging::SUMMARY_TARGET;
use clap::Parser;
use massresolve_domain::{CliOverrides, ExtractRule, RecordClass, RecordType};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "massresolve")]
#[command(version)]
#[command(about = "Resolve large lists of hostnames with bounded concurrency")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Input file with one name per line ("-" for stdin)
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Record type to query: A, AAAA, TXT, NS, CNAME or PTR
    #[arg(short = 't', long = "type")]
    record_type: Option<RecordType>,

    /// Record class: IN, CH or HS
    #[arg(long = "class")]
    record_class: Option<RecordClass>,

    /// Maximum number of resolutions in flight
    #[arg(short = 'n', long)]
    max_in_flight: Option<usize>,

    /// Which part of each line is the name: line, first or last
    #[arg(short = 'f', long)]
    field: Option<ExtractRule>,

    /// Upstream resolver, ip or ip:port (repeatable)
    #[arg(short = 'u', long = "upstream")]
    upstreams: Vec<String>,

    /// Per-attempt timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Attempts per query across upstreams
    #[arg(long)]
    attempts: Option<u32>,

    /// Name resolved once at startup to verify the resolver works
    #[arg(long)]
    seed: Option<String>,

    /// Resolver worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Log run counters when finished
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            record_type: self.record_type,
            record_class: self.record_class,
            max_in_flight: self.max_in_flight,
            seed_name: self.seed.clone(),
            input: self.input.clone(),
            field: self.field,
            upstreams: self.upstreams.clone(),
            query_timeout_ms: self.timeout_ms,
            attempts: self.attempts,
            worker_threads: self.threads,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not be installed yet
            eprintln!("massresolve: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config, cli.summary)?;
    bootstrap::log_config(cli.config.as_deref(), &config);

    let runtime = bootstrap::build_runtime(&config.resolver)?;
    let orchestrator = di::build_orchestrator(&config, runtime.handle().clone())?;

    let summary = runtime.block_on(orchestrator.run())?;

    if cli.summary {
        tracing::info!(
            target: SUMMARY_TARGET,
            submitted = summary.submitted,
            completed = summary.completed,
            answers = summary.answers,
            resolution_failures = summary.resolution_failures,
            decode_failures = summary.decode_failures,
            rejected = summary.rejected,
            duplicates_skipped = summary.duplicates_skipped,
            peak_in_flight = summary.peak_in_flight,
            "Run summary"
        );
    }

    Ok(())
}
