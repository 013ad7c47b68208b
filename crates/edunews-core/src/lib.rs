use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod clip;
pub mod config;

pub use app_config::AppConfig;
pub use catalog::{COMMERCIAL_PHRASES, SEARCH_KEYWORDS};
pub use clip::ClipRecord;
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
