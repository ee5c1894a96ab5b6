//! Desktop stand-ins for the OS surfaces the pipeline talks to.

pub mod notifier;
pub mod permission;
pub mod share;
pub mod terminal;

pub use notifier::TerminalNotifier;
pub use permission::{StaticPermission, TerminalPermissionPrompt};
pub use share::ClipboardShareSheet;
