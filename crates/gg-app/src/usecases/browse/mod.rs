//! Query/pagination controller for the media grid.

mod controller;
mod debounce;

pub use controller::{BrowseController, FetchOutcome, SessionView};
pub use debounce::SearchDebouncer;
