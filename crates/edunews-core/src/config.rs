use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("EDUNEWS_LOG_LEVEL", "info");
    let gdelt_base_url = or_default(
        "EDUNEWS_GDELT_BASE_URL",
        "https://api.gdeltproject.org/api/v2/tv/tv",
    );

    let fetch_timeout_secs = parse_u64("EDUNEWS_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_max_retries = parse_u32("EDUNEWS_FETCH_MAX_RETRIES", "2")?;
    let fetch_backoff_base_ms = parse_u64("EDUNEWS_FETCH_BACKOFF_BASE_MS", "500")?;
    let fetch_max_concurrent = parse_usize("EDUNEWS_FETCH_MAX_CONCURRENT", "4")?;
    let user_agent = or_default("EDUNEWS_USER_AGENT", "edunews/0.1 (tv-news-monitoring)");

    Ok(AppConfig {
        log_level,
        gdelt_base_url,
        fetch_timeout_secs,
        fetch_max_retries,
        fetch_backoff_base_ms,
        fetch_max_concurrent,
        user_agent,
    })
}
