//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto the [`AppConfig`] DTO.
//!
//! > **Pure data loading only. Accept whatever is in the file.**
//! > No validation and no defaults; missing keys stay empty.

use anyhow::Context;
use std::path::Path;
use gg_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            api_key = "from-file"
            page_size = 25

            [storage]
            documents_dir = "/path/to/docs"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.documents_dir, PathBuf::from("/path/to/docs"));
        // Not in the file: stays empty
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.debounce_ms, 0);
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(Path::new("/nonexistent/gifgrid.toml")).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\napi_key = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
