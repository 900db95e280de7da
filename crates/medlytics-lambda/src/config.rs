use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_BUCKET: &str = "medlytics";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MEDLYTICS_STORE must be \"s3\" or \"memory\", got {0:?}")]
    InvalidStore(String),
}

/// Where analyses are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    S3,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s3" => Ok(StoreBackend::S3),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::InvalidStore(s.to_string())),
        }
    }
}

/// API settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bucket: String,
    pub store: StoreBackend,
    pub jwt_secret: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let store = match var("MEDLYTICS_STORE") {
            Some(value) => value.trim().parse()?,
            None => StoreBackend::default(),
        };

        Ok(Self {
            bucket: var("MEDLYTICS_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            store,
            jwt_secret: var("MEDLYTICS_JWT_SECRET"),
        })
    }
}
