use emaildefense_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        nameserver = %config.resolver.nameserver,
        protocol = config.resolver.protocol.as_str(),
        query_timeout_ms = config.resolver.query_timeout_ms,
        deadline_ms = config.resolver.deadline_ms,
        "Configuration loaded"
    );

    Ok(config)
}
