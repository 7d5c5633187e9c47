//! Environment-provided configuration

use crate::error::ConfigError;
use crate::strings::Locale;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Base URL used when `SHELF_API_URL` is unset or blank
pub const DEFAULT_API_URL: &str = "https://book-api-8z8v.onrender.com/api";

pub const DEFAULT_DATA_PATH: &str = "./shelf_data";

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Remote book API base, without a trailing slash
    pub api_base_url: String,
    pub locale: Locale,
    /// Directory for durable client state
    pub data_path: PathBuf,
    pub bind: SocketAddr,
}

impl ShelfConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |name: &str| std::env::var(name).ok();
        Self::from_values(
            var("SHELF_API_URL").as_deref(),
            var("SHELF_LOCALE").as_deref(),
            var("SHELF_DATA_PATH").as_deref(),
            var("SHELF_BIND").as_deref(),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        locale: Option<&str>,
        data_path: Option<&str>,
        bind: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let locale = match locale {
            Some(raw) => raw.parse()?,
            None => Locale::default(),
        };

        let bind = bind.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BIND);
        let bind = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(bind.to_string()))?;

        let data_path = data_path
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_DATA_PATH);

        Ok(Self {
            api_base_url: normalize_base_url(api_url),
            locale,
            data_path: PathBuf::from(data_path),
            bind,
        })
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            locale: Locale::default(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

/// Trim whitespace and trailing slashes, falling back to the default when blank
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(|s| s.trim().trim_end_matches('/')).unwrap_or("");
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::from_values(None, None, None, None).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(normalize_base_url(Some("http://localhost:8080/api/")), "http://localhost:8080/api");
        assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_URL);
        assert_eq!(normalize_base_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_explicit_values() {
        let config = ShelfConfig::from_values(
            Some("http://api.test"),
            Some("en"),
            Some("/var/lib/shelf"),
            Some("0.0.0.0:8080"),
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://api.test");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.data_path, PathBuf::from("/var/lib/shelf"));
        assert_eq!(config.bind.port(), 8080);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            ShelfConfig::from_values(None, Some("klingon"), None, None),
            Err(ConfigError::UnsupportedLocale("klingon".to_string()))
        );
        assert_eq!(
            ShelfConfig::from_values(None, None, None, Some("nowhere")),
            Err(ConfigError::InvalidBindAddress("nowhere".to_string()))
        );
    }
}
