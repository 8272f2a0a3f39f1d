//! Analyzer configuration.

use std::env;
use std::time::Duration;

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Pause after each progress report.
    pub progress_delay: Duration,

    /// Quiet period before buffered collector writes are flushed.
    pub collector_debounce: Duration,

    /// Hard ceiling around each external source call.
    pub resolve_timeout: Duration,

    /// Skip external resolution entirely.
    pub offline: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            progress_delay: Duration::ZERO,
            collector_debounce: Duration::from_secs(2),
            resolve_timeout: Duration::from_secs(10),
            offline: false,
        }
    }
}

impl AnalyzerConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SCANNER_PROGRESS_DELAY_MS` - Pause between progress steps (default: 0)
    /// - `SCANNER_COLLECTOR_DEBOUNCE_MS` - Collector flush debounce (default: 2000)
    /// - `SCANNER_RESOLVE_TIMEOUT_SECS` - Per-source lookup ceiling (default: 10)
    /// - `SCANNER_OFFLINE` - Disable external resolution (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let progress_delay = env_u64("SCANNER_PROGRESS_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.progress_delay);

        let collector_debounce = env_u64("SCANNER_COLLECTOR_DEBOUNCE_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.collector_debounce);

        let resolve_timeout = env_u64("SCANNER_RESOLVE_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.resolve_timeout);

        let offline = env::var("SCANNER_OFFLINE")
            .ok()
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.offline);

        Self {
            progress_delay,
            collector_debounce,
            resolve_timeout,
            offline,
        }
    }

    pub fn with_progress_delay(mut self, delay: Duration) -> Self {
        self.progress_delay = delay;
        self
    }

    pub fn with_collector_debounce(mut self, debounce: Duration) -> Self {
        self.collector_debounce = debounce;
        self
    }

    pub fn with_resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.progress_delay, Duration::ZERO);
        assert_eq!(config.collector_debounce, Duration::from_millis(2000));
        assert_eq!(config.resolve_timeout, Duration::from_secs(10));
        assert!(!config.offline);
    }

    #[test]
    fn test_builders() {
        let config = AnalyzerConfig::default()
            .with_offline(true)
            .with_collector_debounce(Duration::from_millis(10));
        assert!(config.offline);
        assert_eq!(config.collector_debounce, Duration::from_millis(10));
    }
}
