//! Builds the [`App`] from resolved configuration.

use std::sync::Arc;

use anyhow::Context;
use gg_app::{App, AppDeps, AppSettings};
use gg_core::ports::PermissionPort;
use gg_core::{AppConfig, PermissionDecision};
use gg_infra::{GiphyClient, HttpTransfer};
use gg_platform::{
    ClipboardShareSheet, StaticPermission, TerminalNotifier, TerminalPermissionPrompt,
};
use tracing::debug;

/// Wire every port to its production adapter.
///
/// `grant_storage` pre-answers the storage prompt; otherwise the user is
/// asked on the terminal the first time a download needs it.
pub fn build_app(config: &AppConfig, grant_storage: bool) -> anyhow::Result<App> {
    let media_source =
        GiphyClient::from_config(config).context("Failed to create the media API client")?;
    let transfer = HttpTransfer::new().context("Failed to create the download client")?;

    let permission: Arc<dyn PermissionPort> = if grant_storage {
        Arc::new(StaticPermission(PermissionDecision::Granted))
    } else {
        Arc::new(TerminalPermissionPrompt)
    };

    let deps = AppDeps {
        media_source: Arc::new(media_source),
        transfer: Arc::new(transfer),
        permission,
        share: Arc::new(ClipboardShareSheet::new(true)),
        notifier: Arc::new(TerminalNotifier),
    };
    debug!(grant_storage, "dependencies wired");

    Ok(App::new(deps, AppSettings::from(config)))
}
