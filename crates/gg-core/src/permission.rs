/// Process-wide storage-write permission as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Not asked yet, or the last prompt failed before the user decided.
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// What the user answered to an OS permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted,
    Denied,
}

impl From<PermissionDecision> for PermissionState {
    fn from(decision: PermissionDecision) -> Self {
        match decision {
            PermissionDecision::Granted => PermissionState::Granted,
            PermissionDecision::Denied => PermissionState::Denied,
        }
    }
}
