use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `OUTREACH__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// Synthetic feed settings. The categorical domains, seasonality table, and
/// funnel rates are compile-time constants; only the window, seed, and the
/// simulated load latency are configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Total generated days, anchor day included.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Artificial delay before the feed becomes visible to readers.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    /// Seed for the feed RNG. None draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default functions
fn default_node_id() -> String {
    "node-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_window_days() -> u32 {
    121
}
fn default_load_delay_ms() -> u64 {
    1200
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            load_delay_ms: default_load_delay_ms(),
            seed: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("OUTREACH")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.feed.window_days, 121);
        assert_eq!(config.api.http_port, 8080);
        assert!(config.feed.seed.is_none());
    }
}
