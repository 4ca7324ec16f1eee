//! Service Configuration Settings
//!
//! Configuration types for the risk score service, loaded from environment
//! variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::application::services::DEFAULT_MAX_ENTRIES;

/// Default Jupiter Shield endpoint.
pub const DEFAULT_SHIELD_API_URL: &str = "https://lite-api.jup.ag/ultra/v1/shield";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Listen port.
    pub http_port: u16,
    /// Bind address.
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            http_port: 8787,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

impl ServerSettings {
    /// Listen address built from the bind IP and port. IPv6 literals such
    /// as `::` are accepted without brackets.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the bind address is not an IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "RISK_SCORE_BIND_ADDRESS must be an IP address, got '{}'",
                self.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.http_port))
    }
}

/// Outbound Shield API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Shield endpoint; the mint is passed as the `mints` query parameter.
    pub base_url: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Extra attempts after a retryable failure (0 = single attempt).
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_delay: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SHIELD_API_URL.to_string(),
            timeout: Duration::from_millis(15_000),
            max_retries: 2,
            retry_delay: Duration::from_millis(1_000),
        }
    }
}

/// Response caching settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// `max-age` advertised in the `Cache-Control` header.
    pub http_max_age: Duration,
    /// In-process assessment cache TTL (zero disables the cache).
    pub assessment_ttl: Duration,
    /// Maximum number of mints held by the in-process cache.
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            http_max_age: Duration::from_secs(300),
            assessment_ttl: Duration::ZERO,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheSettings {
    /// Whether the in-process cache is enabled.
    #[must_use]
    pub const fn assessment_cache_enabled(&self) -> bool {
        !self.assessment_ttl.is_zero()
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Shield API settings.
    pub provider: ProviderSettings,
    /// Caching settings.
    pub cache: CacheSettings,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_defaults = ServerSettings::default();
        let provider_defaults = ProviderSettings::default();
        let cache_defaults = CacheSettings::default();

        let server = ServerSettings {
            http_port: parse_env_u16("RISK_SCORE_HTTP_PORT", server_defaults.http_port),
            bind_address: std::env::var("RISK_SCORE_BIND_ADDRESS")
                .unwrap_or(server_defaults.bind_address),
        };

        let provider = ProviderSettings {
            base_url: std::env::var("SHIELD_API_URL").unwrap_or(provider_defaults.base_url),
            timeout: parse_env_duration_millis("SHIELD_TIMEOUT_MS", provider_defaults.timeout),
            max_retries: parse_env_u32("SHIELD_MAX_RETRIES", provider_defaults.max_retries),
            retry_delay: parse_env_duration_millis(
                "SHIELD_RETRY_DELAY_MS",
                provider_defaults.retry_delay,
            ),
        };

        let cache = CacheSettings {
            http_max_age: parse_env_duration_secs(
                "RISK_CACHE_CONTROL_MAX_AGE_SECS",
                cache_defaults.http_max_age,
            ),
            assessment_ttl: parse_env_duration_secs(
                "RISK_CACHE_TTL_SECS",
                cache_defaults.assessment_ttl,
            ),
            max_entries: parse_env_usize("RISK_CACHE_MAX_ENTRIES", cache_defaults.max_entries),
        };

        let config = Self {
            server,
            provider,
            cache,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that cannot be expressed in the types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        let url = self.provider.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid(
                "SHIELD_API_URL cannot be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "SHIELD_API_URL must be an http(s) URL, got '{url}'"
            )));
        }
        if self.provider.timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "SHIELD_TIMEOUT_MS must be greater than zero".to_string(),
            ));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Invalid(
                "RISK_CACHE_MAX_ENTRIES must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `Cache-Control` header value for successful assessments.
    #[must_use]
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache.http_max_age.as_secs())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A setting has an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn parse_env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_duration_secs(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}

fn parse_env_duration_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_millis)
}
