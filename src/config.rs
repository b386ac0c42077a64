use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_CUSTOMERS_TABLE: &str = "customers";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Where customer records are read from and deleted in
#[derive(Clone, Debug, PartialEq)]
pub enum Backend {
    /// Supabase project reached through its PostgREST endpoint
    Supabase { url: String, anon_key: String },
    /// Process-local store, starts empty (dev mode)
    Memory,
}

/// Application configuration
/// In debug builds: also loads a .env file before reading the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub backend: Backend,
    /// Table (PostgREST resource) holding the customer rows
    pub customers_table: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, reading process environment");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let customers_table = lookup("CUSTOMERS_TABLE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_CUSTOMERS_TABLE.to_string());

        let use_memory_store = lookup("CUSTOMERS_USE_MEMORY_STORE")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        if use_memory_store {
            warn!("Using in-memory customer store, nothing will be persisted");
            return Ok(Self {
                backend: Backend::Memory,
                customers_table,
            });
        }

        let url = lookup("SUPABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = lookup("SUPABASE_ANON_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let parsed = Url::parse(url.trim()).map_err(|e| ConfigError::Invalid {
            name: "SUPABASE_URL",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "SUPABASE_URL",
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        info!("Using Supabase project at {}", parsed);

        Ok(Self {
            backend: Backend::Supabase {
                url: url.trim().trim_end_matches('/').to_string(),
                anon_key: anon_key.trim().to_string(),
            },
            customers_table,
        })
    }
}
