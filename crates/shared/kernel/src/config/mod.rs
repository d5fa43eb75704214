use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `VAPPS__SITE__BASE_URL`.
pub const ENV_PREFIX: &str = "VAPPS";

/// Default configuration file stem, resolved relative to the working directory.
pub const DEFAULT_CONFIG: &str = "server";

/// Custom error type for config loading.
#[vapps_derive::site_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a required file overlaid with environment overrides.
///
/// 1. **Base File**: `path`, or `server` (any supported extension) when `None`.
/// 2. **Environment Overrides**: variables prefixed with `VAPPS__`; nested keys use
///    double underscores (`VAPPS__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// Returns an error if the file cannot be found, or if the merged sources do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use vapps_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = effective_path(path);
    info!("Loading config from {}", path.display());
    build(layered(&path, true))
}

/// Like [`load_config`], but a missing file falls back to the type's serde defaults.
///
/// The exporter uses this so it can run from a clean checkout without a config file.
///
/// # Errors
/// Returns an error if a present file or the environment overrides are malformed.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = effective_path(path);
    info!("Loading optional config from {}", path.display());
    build(layered(&path, false))
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf())
}

fn layered(path: &Path, required: bool) -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from(path).required(required)).add_source(
        Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
    )
}

fn build<T>(builder: ConfigBuilder<DefaultState>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
