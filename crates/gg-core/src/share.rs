use serde::Serialize;

use crate::media::MediaRecord;

pub const SHARE_TITLE: &str = "Share GIF";
pub const SHARE_MESSAGE: &str = "Check out this cool GIF!";

/// Payload handed to the OS share surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub url: String,
    pub title: String,
    pub message: String,
}

impl ShareRequest {
    pub fn for_record(record: &MediaRecord) -> Self {
        Self {
            url: record.original().url().to_string(),
            title: SHARE_TITLE.to_string(),
            message: SHARE_MESSAGE.to_string(),
        }
    }
}

/// Non-error endings of a share sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// A target app received the payload.
    Completed,
    /// A target app was opened and then dismissed.
    Dismissed,
}
