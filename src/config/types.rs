use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Settings for the crowd-monitoring API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the monitoring service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between poll cycles (default: 5).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Milliseconds between UI ticks (default: 250).
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// View shown at startup: "map", "dashboard" or "activity".
    #[serde(default = "default_view")]
    pub default_view: String,
}

/// Settings for the analytics reporter.
///
/// The reporter stays disabled unless both `measurement_id` and
/// `api_secret` are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Collection endpoint (GA4 Measurement Protocol).
    #[serde(default = "default_analytics_endpoint")]
    pub endpoint: String,
    /// Measurement id (e.g. "G-XXXXXXXXXX").
    #[serde(default)]
    pub measurement_id: Option<String>,
    /// API secret for the measurement protocol.
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl AnalyticsConfig {
    pub fn is_configured(&self) -> bool {
        self.measurement_id.is_some() && self.api_secret.is_some()
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_poll_interval() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_millis() -> u64 {
    250
}

fn default_view() -> String {
    "map".to_string()
}

fn default_analytics_endpoint() -> String {
    "https://www.google-analytics.com/mp/collect".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_seconds: default_poll_interval(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            default_view: default_view(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_analytics_endpoint(),
            measurement_id: None,
            api_secret: None,
        }
    }
}
