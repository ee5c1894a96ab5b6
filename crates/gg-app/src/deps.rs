//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use gg_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Remote API
    pub media_source: Arc<dyn MediaSourcePort>,

    // Local persistence
    pub transfer: Arc<dyn TransferPort>,

    // OS surfaces
    pub permission: Arc<dyn PermissionPort>,
    pub share: Arc<dyn SharePort>,
    pub notifier: Arc<dyn NotifierPort>,
}
