use async_trait::async_trait;
use gg_core::ports::{SharePort, SharePortError};
use gg_core::{ShareOutcome, ShareRequest};
use tracing::{debug, info};

use crate::terminal::{is_yes, read_line};

/// Desktop share sheet: puts the message and url on the system clipboard.
///
/// With confirmation enabled the user is asked first, and a "no" is
/// reported as a user cancellation.
#[derive(Debug, Default)]
pub struct ClipboardShareSheet {
    confirm: bool,
}

impl ClipboardShareSheet {
    pub fn new(confirm: bool) -> Self {
        Self { confirm }
    }
}

/// Text placed on the clipboard for a share request.
pub fn share_text(request: &ShareRequest) -> String {
    format!("{}\n{}", request.message, request.url)
}

#[async_trait]
impl SharePort for ClipboardShareSheet {
    async fn share(&self, request: &ShareRequest) -> Result<ShareOutcome, SharePortError> {
        if self.confirm {
            let prompt = format!("{}: copy {} to the clipboard? [y/N] ", request.title, request.url);
            let answer = read_line(prompt)
                .await
                .map_err(|e| SharePortError::Platform(e.to_string()))?;
            if !answer.as_deref().is_some_and(is_yes) {
                debug!("share sheet dismissed without a target");
                return Err(SharePortError::UserCancelled);
            }
        }

        let text = share_text(request);
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text)
        })
        .await
        .map_err(|e| SharePortError::Platform(e.to_string()))?
        .map_err(|e| SharePortError::Platform(e.to_string()))?;

        info!(url = %request.url, "share payload copied to clipboard");
        Ok(ShareOutcome::Completed)
    }
}
