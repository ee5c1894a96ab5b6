use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "gifgrid";

/// Get the gifgrid application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/gifgrid
/// - Windows: %APPDATA%\gifgrid
/// - Linux: $XDG_DATA_HOME/gifgrid or ~/.local/share/gifgrid
///
/// # Behavior
/// - This function does not automatically create directories.
/// - The caller decides when to create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}

/// Log file directory
pub fn logs_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}

/// Where downloads go unless configured otherwise: `~/Documents/gifgrid`,
/// falling back to the data directory on systems without a documents folder.
pub fn default_documents_dir() -> Result<PathBuf> {
    match dirs::document_dir() {
        Some(documents) => Ok(documents.join(APP_DIR_NAME)),
        None => Ok(app_data_dir()?.join("documents")),
    }
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // Prefer XDG_DATA_HOME, fall back to ~/.local/share
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}
