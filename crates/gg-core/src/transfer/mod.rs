//! Download task bookkeeping and the on-device naming rule.

use std::path::{Path, PathBuf};

use crate::ids::{MediaId, TaskId};

/// Extension of every downloaded media file.
pub const DOWNLOAD_EXTENSION: &str = "gif";

/// Deterministic target for a record: `{documents_dir}/{id}.gif`.
///
/// Returns `None` for ids that are not a safe single path component.
pub fn download_path(documents_dir: &Path, id: &MediaId) -> Option<PathBuf> {
    if !id.is_path_safe() {
        return None;
    }
    Some(documents_dir.join(format!("{}.{}", id, DOWNLOAD_EXTENSION)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    Pending,
    InFlight,
    Succeeded,
    Failed(String),
}

impl DownloadStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DownloadStatus::Succeeded | DownloadStatus::Failed(_))
    }
}

/// One user-initiated download. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub id: TaskId,
    pub media_id: MediaId,
    pub target: PathBuf,
    pub status: DownloadStatus,
}

impl DownloadTask {
    pub fn new(media_id: MediaId, target: PathBuf) -> Self {
        Self {
            id: TaskId::new(),
            media_id,
            target,
            status: DownloadStatus::Pending,
        }
    }
}
