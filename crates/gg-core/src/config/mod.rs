//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//! > Missing keys become empty values; filling them in is the caller's job.

use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://api.giphy.com/v1/gifs";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base url of the media API, without the endpoint segment
    pub api_base_url: String,

    /// Static API credential (may be empty - this is a fact, not an error)
    pub api_key: String,

    /// Records requested per page
    pub page_size: u32,

    /// Per-request timeout; 0 leaves the transport default in place
    pub request_timeout_secs: u64,

    /// Quiet window for search text changes
    pub debounce_ms: u64,

    /// Directory downloads are written to (path info only, no existence check)
    pub documents_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            api_base_url: section("api", "base_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_key: section("api", "api_key")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            page_size: section("api", "page_size")
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0),
            request_timeout_secs: section("api", "request_timeout_secs")
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
            debounce_ms: section("browse", "debounce_ms")
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
            documents_dir: PathBuf::from(
                section("storage", "documents_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_key: String::new(),
            page_size: 0,
            request_timeout_secs: 0,
            debounce_ms: 0,
            documents_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default values for production use
    ///
    /// The documents directory should be computed by the caller using
    /// platform-specific logic (e.g., `dirs` crate).
    pub fn with_system_defaults(documents_dir: PathBuf) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            page_size: crate::query::DEFAULT_PAGE_SIZE,
            request_timeout_secs: 0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            documents_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_str = r#"
            [api]
            # api_key is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [api]
            base_url = "http://localhost:9000/v1/gifs"
            api_key = "secret"
            page_size = 30
            request_timeout_secs = 15

            [browse]
            debounce_ms = 250

            [storage]
            documents_dir = "/tmp/gifs"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:9000/v1/gifs");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.documents_dir, PathBuf::from("/tmp/gifs"));
    }

    #[test]
    fn test_with_system_defaults() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/docs"));

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.documents_dir, PathBuf::from("/tmp/docs"));
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_from_toml_treats_out_of_range_numbers_as_missing() {
        let toml_str = r#"
            [api]
            page_size = -1
            request_timeout_secs = -30

            [browse]
            debounce_ms = -5
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.page_size, 0);
        assert_eq!(config.request_timeout_secs, 0);
        assert_eq!(config.debounce_ms, 0);

        let too_big: Value = toml::from_str("[api]\npage_size = 5000000000\n").unwrap();
        assert_eq!(AppConfig::from_toml(&too_big).unwrap().page_size, 0);
    }
}
