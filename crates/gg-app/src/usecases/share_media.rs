//! Hand a media record to the OS share surface.

use std::sync::Arc;

use gg_core::ports::{NotifierPort, SharePort, SharePortError};
use gg_core::{MediaRecord, Notice, ShareRequest};
use tracing::{debug, error, info_span, Instrument};

const ERROR_TITLE: &str = "Share Error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("{0}")]
    Failed(String),
}

/// Share the original resource url of a record.
///
/// ## Behavior
/// - Completed or dismissed sheets succeed silently.
/// - A sheet the user cancelled also succeeds silently; it is not an error.
/// - Any other failure is surfaced with its detail.
pub struct ShareMediaUseCase {
    share: Arc<dyn SharePort>,
    notifier: Arc<dyn NotifierPort>,
}

impl ShareMediaUseCase {
    pub fn new(share: Arc<dyn SharePort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { share, notifier }
    }

    pub async fn execute(&self, record: &MediaRecord) -> Result<(), ShareError> {
        let span = info_span!("usecase.share_media.execute", media_id = %record.id());

        async {
            let request = ShareRequest::for_record(record);
            match self.share.share(&request).await {
                Ok(outcome) => {
                    debug!(?outcome, "share sheet closed");
                    Ok(())
                }
                Err(SharePortError::UserCancelled) => {
                    debug!("share cancelled by user");
                    Ok(())
                }
                Err(SharePortError::Platform(detail)) => {
                    error!(%detail, "share failed");
                    self.notifier.notify(Notice::error(
                        ERROR_TITLE,
                        format!("Error sharing GIF: {detail}"),
                    ));
                    Err(ShareError::Failed(detail))
                }
            }
        }
        .instrument(span)
        .await
    }
}
