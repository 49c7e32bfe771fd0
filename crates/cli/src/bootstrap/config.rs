use reverse_dns_domain::{CliOverrides, Config};

/// Loads and validates the configuration; any failure aborts startup.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
