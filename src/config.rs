use crate::domain::notifications::{NotificationError, DEFAULT_SEEN_STORAGE_KEY};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Longest delay `setTimeout` honours. Browsers store the delay as a signed
/// 32-bit millisecond count; anything larger wraps and fires immediately.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(i32::MAX as u64);

/// Environment variable holding the storefront API base URL (native hosts).
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
pub const POLL_INTERVAL_ENV: &str = "ADMIN_NOTIFICATIONS_INTERVAL_SECS";

/// Millisecond delay for a browser timer, capped at [`MAX_POLL_INTERVAL`].
pub fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.min(MAX_POLL_INTERVAL).as_millis()).unwrap_or(i32::MAX as u32)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollerConfig {
    pub api_base_url: String,
    pub poll_interval: Duration,
    pub seen_storage_key: String,
    pub bearer_token: Option<String>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            seen_storage_key: DEFAULT_SEEN_STORAGE_KEY.to_string(),
            bearer_token: None,
        }
    }
}

impl PollerConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_seen_storage_key(mut self, key: impl Into<String>) -> Self {
        self.seen_storage_key = key.into();
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<(), NotificationError> {
        if self.api_base_url.trim().is_empty() {
            return Err(NotificationError::config("API base URL is empty"));
        }
        if self.poll_interval.is_zero() {
            return Err(NotificationError::config("Poll interval must be positive"));
        }
        if self.poll_interval > MAX_POLL_INTERVAL {
            return Err(NotificationError::config(format!(
                "Poll interval must not exceed {}ms",
                MAX_POLL_INTERVAL.as_millis()
            )));
        }
        if self.seen_storage_key.is_empty() {
            return Err(NotificationError::config("Seen storage key is empty"));
        }
        Ok(())
    }

    /// Reads the base URL and interval from the environment, loading `.env`
    /// first when present. Unset or unparsable values fall back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        Self {
            api_base_url: std::env::var(API_URL_ENV).unwrap_or(defaults.api_base_url),
            poll_interval: std::env::var(POLL_INTERVAL_ENV)
                .ok()
                .and_then(|secs| secs.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .filter(|interval| *interval <= MAX_POLL_INTERVAL)
                .unwrap_or(defaults.poll_interval),
            ..defaults
        }
    }
}
