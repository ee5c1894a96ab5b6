//! # gg-core
//!
//! Core domain models and business logic for gifgrid.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod media;
pub mod notice;
pub mod permission;
pub mod ports;
pub mod query;
pub mod share;
pub mod transfer;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{MediaId, TaskId};
pub use media::{MediaRecord, ResourceError, ResourceRef};
pub use notice::{Notice, NoticeLevel};
pub use permission::{PermissionDecision, PermissionState};
pub use query::{
    ApplyOutcome, FetchResult, FetchTicket, PageQuery, QueryMode, QuerySession, DEFAULT_PAGE_SIZE,
};
pub use share::{ShareOutcome, ShareRequest};
pub use transfer::{DownloadStatus, DownloadTask};
