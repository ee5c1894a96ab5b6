//! gifgrid Application Orchestration Layer
//!
//! This crate contains the use cases of the media discovery and retrieval
//! pipeline: the query/pagination controller, the permission gate, and the
//! download and share use cases.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, AppSettings};
pub use deps::AppDeps;
