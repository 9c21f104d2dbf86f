//! Startup configuration loading

use anyhow::bail;
use chirpy_shared::config::AppConfig;

/// Load the application configuration from the environment
///
/// Fails with every startup problem listed when the configuration is not
/// usable.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config = AppConfig::from_env();
    let problems = config.startup_problems();
    if !problems.is_empty() {
        bail!("invalid configuration: {}", problems.join("; "));
    }

    Ok(config)
}
