/// Operational settings for a pipeline run.
///
/// Everything here has a default, so a bare environment works. The keyword
/// vocabulary itself is compiled in (see [`crate::catalog`]) and is
/// deliberately not configurable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of the clip search endpoint. Overridden in tests to point at
    /// a local mock server.
    pub gdelt_base_url: String,
    pub fetch_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_backoff_base_ms: u64,
    pub fetch_max_concurrent: usize,
    pub user_agent: String,
}
