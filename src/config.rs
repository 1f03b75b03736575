use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure shared by the proxy and the dish server
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProxyConfig {
    /// Where the AI recipe backend lives
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Wake-up and retry behavior for upstream calls
    #[serde(default)]
    pub retry: RetryConfig,
    /// Proxy API server binding
    #[serde(default)]
    pub server: ServerConfig,
    /// Restaurant dish demo server
    #[serde(default)]
    pub dishes: DishServerConfig,
}

/// Upstream endpoints
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the recipe/meal-plan generator
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the meal-prep service
    #[serde(default = "default_meal_prep_url")]
    pub meal_prep_url: String,
    /// Outer deadline for one proxied call, wake-up and retries included
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            meal_prep_url: default_meal_prep_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration for wake-up pings and retry behavior
#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    /// Retries after the first failed attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Backoff unit in milliseconds; retry N waits N times this
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Wake-up GET pings sent before the main call (0 disables them)
    #[serde(default = "default_wakeup_attempts")]
    pub wakeup_attempts: u32,
    /// Per-ping timeout in seconds
    #[serde(default = "default_wakeup_timeout_secs")]
    pub wakeup_timeout_secs: u64,
    /// Pause between failed pings in milliseconds
    #[serde(default = "default_wakeup_delay_ms")]
    pub wakeup_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            wakeup_attempts: default_wakeup_attempts(),
            wakeup_timeout_secs: default_wakeup_timeout_secs(),
            wakeup_delay_ms: default_wakeup_delay_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_server_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DishServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_dishes_port")]
    pub port: u16,
    /// JSON file the dish list is loaded from and persisted to
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for DishServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_dishes_port(),
            data_file: default_data_file(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://fusion-meals-new.onrender.com".to_string()
}

fn default_meal_prep_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    5000
}

fn default_wakeup_attempts() -> u32 {
    3
}

fn default_wakeup_timeout_secs() -> u64 {
    10
}

fn default_wakeup_delay_ms() -> u64 {
    5000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_dishes_port() -> u16 {
    8000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data").join("restaurant-dishes.json")
}

impl ProxyConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. `NEXT_PUBLIC_API_URL` and `BACKEND_URL`
    /// 2. Environment variables with FUSION_MEALS__ prefix
    /// 3. config.toml file in current directory
    /// 4. Default values
    ///
    /// Environment variable format: FUSION_MEALS__RETRY__MAX_RETRIES
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ProxyConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ProxyConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: FUSION_MEALS__UPSTREAM__BASE_URL
        .add_source(
            Environment::with_prefix("FUSION_MEALS")
                .separator("__")
                .try_parsing(true),
        )
        // Variable names the frontend deployment already sets
        .set_override_option("upstream.base_url", non_empty_var("NEXT_PUBLIC_API_URL"))?
        .set_override_option("upstream.meal_prep_url", non_empty_var("BACKEND_URL"))?
        .build()?;

    settings.try_deserialize()
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
