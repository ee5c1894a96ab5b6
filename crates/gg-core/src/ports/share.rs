use async_trait::async_trait;

use crate::ports::errors::SharePortError;
use crate::share::{ShareOutcome, ShareRequest};

/// OS share surface.
#[async_trait]
pub trait SharePort: Send + Sync {
    /// Present the share sheet and wait until it closes.
    ///
    /// Error semantics:
    /// - UserCancelled : the sheet was closed without choosing a target
    /// - Platform      : the share subsystem failed
    async fn share(&self, request: &ShareRequest) -> Result<ShareOutcome, SharePortError>;
}
