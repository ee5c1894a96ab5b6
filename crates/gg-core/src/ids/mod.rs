mod id_macro;

use id_macro::impl_id;
use serde::{Deserialize, Serialize};

/// Remote identity of a media record, as assigned by the media API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

/// Identity of one user-initiated download.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl_id!(MediaId, TaskId);

impl TaskId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaId {
    /// Whether the id can be used as a single file name component.
    ///
    /// Ids come from a remote API, so anything that could escape the
    /// target directory is refused.
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && self.0 != "."
            && self.0 != ".."
            && !self.0.contains(['/', '\\', '\0'])
    }
}
