use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use gg_core::AppConfig;

use crate::usecases::{
    BrowseController, DownloadMediaUseCase, DownloadTracker, PermissionGate, ShareMediaUseCase,
};
use crate::AppDeps;

/// Runtime knobs the use cases need, resolved from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub page_size: u32,
    pub debounce: Duration,
    pub documents_dir: PathBuf,
}

impl From<&AppConfig> for AppSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            debounce: Duration::from_millis(config.debounce_ms),
            documents_dir: config.documents_dir.clone(),
        }
    }
}

/// The application runtime.
///
/// Holds the process-wide pieces (permission state, download tasks) and
/// hands out use cases that share them.
pub struct App {
    deps: AppDeps,
    settings: AppSettings,
    permission_gate: Arc<PermissionGate>,
    download_tracker: Arc<DownloadTracker>,
}

impl App {
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: AppDeps, settings: AppSettings) -> Self {
        let permission_gate = Arc::new(PermissionGate::new(deps.permission.clone()));
        Self {
            deps,
            settings,
            permission_gate,
            download_tracker: Arc::new(DownloadTracker::new()),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// A fresh controller for one mounted browse screen.
    pub fn browse_controller(&self) -> Arc<BrowseController> {
        Arc::new(BrowseController::new(
            self.deps.media_source.clone(),
            self.settings.page_size,
            self.settings.debounce,
        ))
    }

    pub fn download_media(&self) -> DownloadMediaUseCase {
        DownloadMediaUseCase::new(
            self.permission_gate.clone(),
            self.deps.transfer.clone(),
            self.deps.notifier.clone(),
            self.download_tracker.clone(),
            self.settings.documents_dir.clone(),
        )
    }

    pub fn share_media(&self) -> ShareMediaUseCase {
        ShareMediaUseCase::new(self.deps.share.clone(), self.deps.notifier.clone())
    }

    pub fn permission_gate(&self) -> Arc<PermissionGate> {
        self.permission_gate.clone()
    }

    pub fn download_tracker(&self) -> Arc<DownloadTracker> {
        self.download_tracker.clone()
    }
}
