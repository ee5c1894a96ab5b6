//! Configuration resolution for the binary.
//!
//! Layers, later wins: system defaults, the optional `--config` file,
//! the `GIFGRID_API_KEY` environment variable, then command-line flags.
//! Empty or zero values in a layer leave the earlier value in place.

use std::path::PathBuf;

use anyhow::Context;
use gg_core::AppConfig;
use gg_infra::config::load_config;
use tracing::warn;

pub const API_KEY_ENV: &str = "GIFGRID_API_KEY";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub documents_dir: Option<PathBuf>,
}

pub fn resolve_config(
    overrides: &ConfigOverrides,
    env_api_key: Option<String>,
) -> anyhow::Result<AppConfig> {
    let documents_dir = gg_infra::fs::default_documents_dir()
        .context("Failed to determine the default documents directory")?;
    resolve_with_defaults(AppConfig::with_system_defaults(documents_dir), overrides, env_api_key)
}

fn resolve_with_defaults(
    mut config: AppConfig,
    overrides: &ConfigOverrides,
    env_api_key: Option<String>,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = &overrides.config_path {
        let file = load_config(path)?;
        merge(&mut config, file);
    }

    if let Some(key) = env_api_key.filter(|key| !key.is_empty()) {
        config.api_key = key;
    }
    if let Some(key) = overrides.api_key.clone() {
        config.api_key = key;
    }
    if let Some(dir) = overrides.documents_dir.clone() {
        config.documents_dir = dir;
    }

    if config.api_key.is_empty() {
        warn!("No API key configured (set {API_KEY_ENV} or --api-key); every fetch will come back empty");
    }
    Ok(config)
}

fn merge(config: &mut AppConfig, layer: AppConfig) {
    if !layer.api_base_url.is_empty() {
        config.api_base_url = layer.api_base_url;
    }
    if !layer.api_key.is_empty() {
        config.api_key = layer.api_key;
    }
    if layer.page_size > 0 {
        config.page_size = layer.page_size;
    }
    if layer.request_timeout_secs > 0 {
        config.request_timeout_secs = layer.request_timeout_secs;
    }
    if layer.debounce_ms > 0 {
        config.debounce_ms = layer.debounce_ms;
    }
    if !layer.documents_dir.as_os_str().is_empty() {
        config.documents_dir = layer.documents_dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn defaults() -> AppConfig {
        AppConfig::with_system_defaults(PathBuf::from("/home/u/Documents/gifgrid"))
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_only() {
        let config = resolve_with_defaults(defaults(), &ConfigOverrides::default(), None).unwrap();

        assert_eq!(config, defaults());
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_file_values_override_defaults_but_empty_keys_do_not() {
        let file = config_file(
            r#"
            [api]
            api_key = "from-file"
            page_size = 30

            [browse]
            debounce_ms = 250
            "#,
        );
        let overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let config = resolve_with_defaults(defaults(), &overrides, None).unwrap();

        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.api_base_url, "https://api.giphy.com/v1/gifs");
        assert_eq!(config.documents_dir, PathBuf::from("/home/u/Documents/gifgrid"));
    }

    #[test]
    fn test_negative_page_size_in_file_keeps_default() {
        let file = config_file("[api]\npage_size = -1\n");
        let overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let config = resolve_with_defaults(defaults(), &overrides, None).unwrap();

        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_env_beats_file_and_flag_beats_env() {
        let file = config_file("[api]\napi_key = \"from-file\"\n");
        let mut overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let config =
            resolve_with_defaults(defaults(), &overrides, Some("from-env".to_string())).unwrap();
        assert_eq!(config.api_key, "from-env");

        overrides.api_key = Some("from-flag".to_string());
        overrides.documents_dir = Some(PathBuf::from("/tmp/gifs"));
        let config =
            resolve_with_defaults(defaults(), &overrides, Some("from-env".to_string())).unwrap();
        assert_eq!(config.api_key, "from-flag");
        assert_eq!(config.documents_dir, PathBuf::from("/tmp/gifs"));
    }

    #[test]
    fn test_empty_env_key_is_ignored() {
        let config =
            resolve_with_defaults(defaults(), &ConfigOverrides::default(), Some(String::new()))
                .unwrap();

        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let overrides = ConfigOverrides {
            config_path: Some(PathBuf::from("/nonexistent/gifgrid.toml")),
            ..Default::default()
        };

        let err = resolve_with_defaults(defaults(), &overrides, None).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}
