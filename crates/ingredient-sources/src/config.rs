//! Configuration for the remote sources.

use std::env;
use std::time::Duration;

/// Configuration shared by the Open Beauty Facts and Wikipedia clients.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    /// Open Beauty Facts base URL.
    pub obf_url: String,

    /// Wikipedia REST summary endpoint.
    pub wiki_url: String,

    /// Timeout for barcode lookups.
    pub product_timeout: Duration,

    /// Timeout for per-ingredient lookups.
    pub ingredient_timeout: Duration,

    /// How long cached responses stay valid.
    pub cache_ttl: Duration,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            obf_url: "https://world.openbeautyfacts.org".to_string(),
            wiki_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            product_timeout: Duration::from_secs(8),
            ingredient_timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            user_agent: "CosmeticScanner/1.0".to_string(),
        }
    }
}

impl SourcesConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SCANNER_OBF_URL` - Open Beauty Facts base URL
    /// - `SCANNER_WIKI_URL` - Wikipedia summary endpoint
    /// - `SCANNER_PRODUCT_TIMEOUT_SECS` - Barcode lookup timeout (default: 8)
    /// - `SCANNER_INGREDIENT_TIMEOUT_SECS` - Ingredient lookup timeout (default: 5)
    /// - `SCANNER_CACHE_TTL_DAYS` - Cache lifetime in days (default: 7)
    /// - `SCANNER_USER_AGENT` - User-Agent header (default: CosmeticScanner/1.0)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let obf_url = env::var("SCANNER_OBF_URL").unwrap_or(defaults.obf_url);
        let wiki_url = env::var("SCANNER_WIKI_URL").unwrap_or(defaults.wiki_url);

        let product_timeout = env_u64("SCANNER_PRODUCT_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.product_timeout);

        let ingredient_timeout = env_u64("SCANNER_INGREDIENT_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.ingredient_timeout);

        let cache_ttl = env_u64("SCANNER_CACHE_TTL_DAYS")
            .map(|days| Duration::from_secs(days.saturating_mul(24 * 60 * 60)))
            .unwrap_or(defaults.cache_ttl);

        let user_agent = env::var("SCANNER_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            obf_url: obf_url.trim_end_matches('/').to_string(),
            wiki_url: wiki_url.trim_end_matches('/').to_string(),
            product_timeout,
            ingredient_timeout,
            cache_ttl,
            user_agent,
        }
    }

    pub fn with_obf_url(mut self, url: impl Into<String>) -> Self {
        self.obf_url = url.into();
        self
    }

    pub fn with_wiki_url(mut self, url: impl Into<String>) -> Self {
        self.wiki_url = url.into();
        self
    }

    pub fn with_product_timeout(mut self, timeout: Duration) -> Self {
        self.product_timeout = timeout;
        self
    }

    pub fn with_ingredient_timeout(mut self, timeout: Duration) -> Self {
        self.ingredient_timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Build the shared HTTP client.
    pub fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.product_timeout.max(self.ingredient_timeout))
            .build()
            .expect("Failed to create HTTP client")
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
        let config = SourcesConfig::default();
        assert_eq!(config.obf_url, "https://world.openbeautyfacts.org");
        assert_eq!(config.product_timeout, Duration::from_secs(8));
        assert_eq!(config.ingredient_timeout, Duration::from_secs(5));
        assert_eq!(config.cache_ttl, Duration::from_secs(604_800));
        assert_eq!(config.user_agent, "CosmeticScanner/1.0");
    }

    #[test]
    fn test_builders() {
        let config = SourcesConfig::default()
            .with_obf_url("http://localhost:9000")
            .with_cache_ttl(Duration::from_secs(60));
        assert_eq!(config.obf_url, "http://localhost:9000");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }
}
