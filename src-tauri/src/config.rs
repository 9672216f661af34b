use std::time::Duration;

/// Configuration for the polling cycle
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub poll_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
        }
    }
}

impl PollerConfig {
    /// Default interval, overridable via `HOTWATCH_POLL_INTERVAL_SECS`.
    /// Zero is clamped to one second so the tick loop cannot spin.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("HOTWATCH_POLL_INTERVAL_SECS")
            && let Ok(parsed) = val.parse::<u64>()
        {
            config.poll_interval = Duration::from_secs(parsed.max(1));
        }

        config
    }
}
