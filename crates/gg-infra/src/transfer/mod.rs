mod http_transfer;

pub use http_transfer::HttpTransfer;
