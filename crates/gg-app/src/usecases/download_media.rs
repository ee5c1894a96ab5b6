//! Permission-gated download of a media record's original resource.

use std::path::PathBuf;
use std::sync::Arc;

use gg_core::ports::{NotifierPort, TransferPort};
use gg_core::transfer::download_path;
use gg_core::{DownloadStatus, MediaRecord, Notice};
use tracing::{error, info, info_span, warn, Instrument};

use super::download_tracker::DownloadTracker;
use super::permission_gate::{PermissionError, PermissionGate};

const SUCCESS_TITLE: &str = "Download Success";
const ERROR_TITLE: &str = "Download Error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("Storage permission denied")]
    PermissionDenied,

    #[error("{0}")]
    TransferFailed(String),

    #[error("Cannot store media with id {0:?}")]
    InvalidTarget(String),
}

/// Download one record to `{documents_dir}/{id}.gif`.
///
/// ## Behavior
/// - Waits for the storage permission; a denial fails before any network
///   call is made.
/// - The transfer runs on its own task so it keeps going if the caller
///   stops waiting; its outcome is still recorded in the tracker.
/// - Repeated downloads of the same record target the same file. Duplicate
///   concurrent downloads are allowed and each completes independently.
/// - Success and failure are surfaced through the notifier.
pub struct DownloadMediaUseCase {
    gate: Arc<PermissionGate>,
    transfer: Arc<dyn TransferPort>,
    notifier: Arc<dyn NotifierPort>,
    tracker: Arc<DownloadTracker>,
    documents_dir: PathBuf,
}

impl DownloadMediaUseCase {
    pub fn new(
        gate: Arc<PermissionGate>,
        transfer: Arc<dyn TransferPort>,
        notifier: Arc<dyn NotifierPort>,
        tracker: Arc<DownloadTracker>,
        documents_dir: PathBuf,
    ) -> Self {
        Self {
            gate,
            transfer,
            notifier,
            tracker,
            documents_dir,
        }
    }

    pub async fn execute(&self, record: &MediaRecord) -> Result<PathBuf, DownloadError> {
        let span = info_span!("usecase.download_media.execute", media_id = %record.id());

        async {
            let Some(target) = download_path(&self.documents_dir, record.id()) else {
                let err = DownloadError::InvalidTarget(record.id().to_string());
                warn!(error = %err, "refusing download target");
                self.notify_failure(&err);
                return Err(err);
            };
            let task_id = self.tracker.register(record.id().clone(), target.clone());

            if let Err(err) = self.gate.ensure_granted().await {
                match &err {
                    PermissionError::Denied => info!("download blocked: permission denied"),
                    PermissionError::PromptFailed(detail) => {
                        warn!(%detail, "download blocked: permission prompt failed")
                    }
                }
                let err = DownloadError::PermissionDenied;
                self.tracker
                    .update(&task_id, DownloadStatus::Failed(err.to_string()));
                self.notify_failure(&err);
                return Err(err);
            }

            self.tracker.update(&task_id, DownloadStatus::InFlight);
            info!(task_id = %task_id, target = %target.display(), "download started");

            let transfer = Arc::clone(&self.transfer);
            let notifier = Arc::clone(&self.notifier);
            let tracker = Arc::clone(&self.tracker);
            let url = record.original().url().to_string();
            let job = async move {
                let result = match transfer.transfer(&url, &target, &task_id).await {
                    Ok(receipt) if receipt.status == 200 => {
                        info!(bytes = receipt.bytes_written, "download finished");
                        Ok(target)
                    }
                    Ok(receipt) => Err(DownloadError::TransferFailed(format!(
                        "Failed to download GIF (HTTP status {})",
                        receipt.status
                    ))),
                    Err(err) => Err(DownloadError::TransferFailed(err.to_string())),
                };

                match &result {
                    Ok(path) => {
                        tracker.update(&task_id, DownloadStatus::Succeeded);
                        notifier.notify(Notice::info(
                            SUCCESS_TITLE,
                            format!("GIF downloaded successfully to: {}", path.display()),
                        ));
                    }
                    Err(err) => {
                        error!(error = %err, "download failed");
                        tracker.update(&task_id, DownloadStatus::Failed(err.to_string()));
                        notifier.notify(failure_notice(err));
                    }
                }
                result
            }
            .in_current_span();

            match tokio::spawn(job).await {
                Ok(result) => result,
                Err(join_err) => {
                    let err = DownloadError::TransferFailed(join_err.to_string());
                    self.notify_failure(&err);
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    fn notify_failure(&self, err: &DownloadError) {
        self.notifier.notify(failure_notice(err));
    }
}

fn failure_notice(err: &DownloadError) -> Notice {
    Notice::error(ERROR_TITLE, format!("Error downloading GIF: {err}"))
}
