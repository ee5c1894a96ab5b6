mod app_dirs;

pub use app_dirs::{app_data_dir, default_documents_dir, logs_dir};
