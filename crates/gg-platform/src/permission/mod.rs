use async_trait::async_trait;
use gg_core::ports::PermissionPort;
use gg_core::PermissionDecision;
use tracing::debug;

use crate::terminal::{is_yes, read_line};

const PROMPT_TITLE: &str = "Storage Permission";
const PROMPT_MESSAGE: &str = "This app needs access to your storage to download GIFs.";

/// Asks on the terminal. Only "y"/"yes" grants.
#[derive(Debug, Default)]
pub struct TerminalPermissionPrompt;

#[async_trait]
impl PermissionPort for TerminalPermissionPrompt {
    async fn request_storage_write(&self) -> anyhow::Result<PermissionDecision> {
        let prompt = format!("{PROMPT_TITLE}: {PROMPT_MESSAGE} Allow? [y/N] ");
        let answer = read_line(prompt)
            .await?
            .ok_or_else(|| anyhow::anyhow!("stdin closed before the permission prompt was answered"))?;
        debug!(%answer, "permission prompt answered");

        Ok(if is_yes(&answer) {
            PermissionDecision::Granted
        } else {
            PermissionDecision::Denied
        })
    }
}

/// Answers every prompt with a decision fixed up front (`--grant-storage`,
/// platforms where storage is always writable).
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(pub PermissionDecision);

#[async_trait]
impl PermissionPort for StaticPermission {
    async fn request_storage_write(&self) -> anyhow::Result<PermissionDecision> {
        Ok(self.0)
    }
}
