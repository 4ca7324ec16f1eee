//! Configuration
//!
//! Environment-driven settings for the server, the Shield client and caching.

mod settings;

pub use settings::{
    CacheSettings, ConfigError, DEFAULT_SHIELD_API_URL, ProviderSettings, ServerSettings,
    ServiceConfig,
};
