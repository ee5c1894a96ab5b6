use anyhow::Result;
use async_trait::async_trait;

use crate::permission::PermissionDecision;

/// OS permission surface for the storage-write capability.
#[async_trait]
pub trait PermissionPort: Send + Sync {
    /// Show the permission prompt and wait for the user's answer.
    ///
    /// Error semantics: `Err` means the prompt itself failed and the user
    /// never decided.
    async fn request_storage_write(&self) -> Result<PermissionDecision>;
}
