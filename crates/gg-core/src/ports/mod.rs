//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the remote API, the filesystem and the OS surfaces.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `gg-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `gg-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod errors;
mod media_source;
mod notifier;
mod permission;
mod share;
mod transfer;

pub use errors::{SharePortError, TransferError};
pub use media_source::MediaSourcePort;
pub use notifier::NotifierPort;
pub use permission::PermissionPort;
pub use share::SharePort;
pub use transfer::{TransferPort, TransferReceipt};
