use cinder_cdn_domain::{CliOverrides, Config};

/// Runs before the tracing subscriber is installed; main logs the
/// configuration summary once logging is up.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
