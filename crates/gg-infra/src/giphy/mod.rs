//! Media Fetch Client for the Giphy-compatible search/trending API.

mod client;
mod dto;

pub use client::{FetchError, GiphyClient};
