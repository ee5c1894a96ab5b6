//! Process-wide storage permission, requested lazily.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;

use gg_core::ports::PermissionPort;
use gg_core::{PermissionDecision, PermissionState};
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("storage permission denied")]
    Denied,

    #[error("permission prompt failed: {0}")]
    PromptFailed(String),
}

struct GateState {
    state: PermissionState,
    last_failure: Option<String>,
}

fn encode(state: PermissionState) -> u8 {
    match state {
        PermissionState::Unknown => 0,
        PermissionState::Granted => 1,
        PermissionState::Denied => 2,
    }
}

fn decode(raw: u8) -> PermissionState {
    match raw {
        1 => PermissionState::Granted,
        2 => PermissionState::Denied,
        _ => PermissionState::Unknown,
    }
}

/// Serializes permission prompts into a single OS dialog.
///
/// ## Behavior
/// - Unknown: the first caller shows the prompt; callers arriving while it
///   is open wait and resolve from the same answer.
/// - Granted: returns immediately.
/// - Denied: sticky, never prompts again.
/// - A prompt that fails leaves the state Unknown; the callers that waited
///   on it fail with the same error and the next request prompts again.
pub struct PermissionGate {
    port: Arc<dyn PermissionPort>,
    inner: Mutex<GateState>,
    /// Copy of `inner.state`, readable without waiting on the lock.
    current: AtomicU8,
    prompts: AtomicU64,
}

impl PermissionGate {
    pub fn new(port: Arc<dyn PermissionPort>) -> Self {
        Self::with_state(port, PermissionState::Unknown)
    }

    /// Start from a state already known to the platform.
    pub fn with_state(port: Arc<dyn PermissionPort>, state: PermissionState) -> Self {
        Self {
            port,
            inner: Mutex::new(GateState {
                state,
                last_failure: None,
            }),
            current: AtomicU8::new(encode(state)),
            prompts: AtomicU64::new(0),
        }
    }

    /// Last decided state; Unknown until a prompt has been answered.
    pub fn state(&self) -> PermissionState {
        decode(self.current.load(Ordering::Acquire))
    }

    /// Number of OS prompts answered (or failed) so far.
    pub fn prompt_count(&self) -> u64 {
        self.prompts.load(Ordering::Acquire)
    }

    /// Ask early, e.g. when the first media item appears.
    pub async fn prefetch(&self) -> PermissionState {
        let _ = self.ensure_granted().await;
        self.state()
    }

    pub async fn ensure_granted(&self) -> Result<(), PermissionError> {
        let observed = self.prompts.load(Ordering::Acquire);
        let mut inner = self.inner.lock().await;

        match inner.state {
            PermissionState::Granted => return Ok(()),
            PermissionState::Denied => return Err(PermissionError::Denied),
            PermissionState::Unknown => {}
        }

        if self.prompts.load(Ordering::Acquire) != observed {
            let detail = inner
                .last_failure
                .clone()
                .unwrap_or_else(|| "prompt did not complete".to_string());
            return Err(PermissionError::PromptFailed(detail));
        }

        let answer = self.port.request_storage_write().await;
        self.prompts.fetch_add(1, Ordering::AcqRel);
        match answer {
            Ok(decision) => {
                inner.state = decision.into();
                inner.last_failure = None;
                self.current.store(encode(inner.state), Ordering::Release);
                info!(?decision, "storage permission decided");
                match decision {
                    PermissionDecision::Granted => Ok(()),
                    PermissionDecision::Denied => Err(PermissionError::Denied),
                }
            }
            Err(err) => {
                warn!(error = %err, "storage permission prompt failed");
                inner.last_failure = Some(err.to_string());
                Err(PermissionError::PromptFailed(err.to_string()))
            }
        }
    }
}
