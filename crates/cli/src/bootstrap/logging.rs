use massresolve_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Target the end-of-run summary is logged under.
pub const SUMMARY_TARGET: &str = "massresolve::summary";

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level;
/// `with_summary` keeps the summary line visible whatever the level.
pub fn init_logging(config: &Config, with_summary: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    if with_summary {
        filter = filter.add_directive(format!("{}=info", SUMMARY_TARGET).parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(false)
        .init();

    info!("Logging initialized at level: {}", config.logging.level);
    Ok(())
}
