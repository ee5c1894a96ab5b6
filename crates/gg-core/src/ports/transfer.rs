use std::path::Path;

use async_trait::async_trait;

use crate::ids::TaskId;
use crate::ports::errors::TransferError;

/// Result of a transfer that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    /// HTTP status the server answered with.
    pub status: u16,
    /// Bytes written to the target; 0 unless the status was 200.
    pub bytes_written: u64,
}

/// Streams a remote resource to a local file.
#[async_trait]
pub trait TransferPort: Send + Sync {
    /// Download `url` into `target`, overwriting any existing file.
    ///
    /// Requirements:
    /// - The target is only replaced when the server answered 200
    /// - The target is replaced atomically; `task_id` keeps concurrent
    ///   transfers to the same target apart
    async fn transfer(
        &self,
        url: &str,
        target: &Path,
        task_id: &TaskId,
    ) -> Result<TransferReceipt, TransferError>;
}
