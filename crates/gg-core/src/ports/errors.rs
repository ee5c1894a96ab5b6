use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharePortError {
    /// The user closed the share sheet without picking a target.
    #[error("User did not share")]
    UserCancelled,

    #[error("{0}")]
    Platform(String),
}
