//! Business logic use cases
//!
//! [search text / scroll end]
//!         ↓
//! BrowseController → MediaSourcePort → session results → renderer
//!         ↓
//! [per-item action]
//!         ↓
//! DownloadMediaUseCase (PermissionGate → TransferPort) / ShareMediaUseCase

pub mod browse;
pub mod download_media;
pub mod download_tracker;
pub mod permission_gate;
pub mod share_media;

pub use browse::{BrowseController, FetchOutcome, SessionView};
pub use download_media::{DownloadError, DownloadMediaUseCase};
pub use download_tracker::DownloadTracker;
pub use permission_gate::{PermissionError, PermissionGate};
pub use share_media::{ShareError, ShareMediaUseCase};
