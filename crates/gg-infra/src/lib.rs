pub mod config;
pub mod fs;
pub mod giphy;
pub mod transfer;

pub use giphy::GiphyClient;
pub use transfer::HttpTransfer;
