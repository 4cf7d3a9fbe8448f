use massresolve_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    Ok(config)
}

/// Log the effective configuration. Requires the subscriber to be installed.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        record_type = %config.query.record_type,
        max_in_flight = config.query.max_in_flight,
        input = config.input.path.as_deref().unwrap_or("-"),
        upstreams = ?config.resolver.upstreams,
        "Configuration loaded"
    );
}
