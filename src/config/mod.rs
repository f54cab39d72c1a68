/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub spacex_api_url: String,
    pub page_limit: i64,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables. Every knob has a
    /// default, so an empty environment is a valid one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let spacex_api_url = env::var("SPACEX_API_URL")
            .unwrap_or_else(|_| "https://api.spacexdata.com/v4".to_string())
            .trim_end_matches('/')
            .to_string();

        let page_limit = env_i64("PAGE_LIMIT", 5);
        if page_limit < 1 {
            anyhow::bail!("PAGE_LIMIT must be at least 1");
        }

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 30);

        Ok(Self {
            spacex_api_url,
            page_limit,
            request_timeout_secs,
        })
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
