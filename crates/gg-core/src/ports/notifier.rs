use crate::notice::Notice;

/// Surfaces user-visible, non-blocking messages (alerts, toasts).
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notice: Notice);
}
