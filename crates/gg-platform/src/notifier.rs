use std::io::Write;

use gg_core::ports::NotifierPort;
use gg_core::{Notice, NoticeLevel};
use tracing::{error, info};

/// Prints notices to stderr, the terminal's equivalent of an alert.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

pub fn format_notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Info => "✔",
        NoticeLevel::Error => "✘",
    };
    format!("{marker} {}: {}", notice.title, notice.message)
}

impl NotifierPort for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => info!(title = %notice.title, "notice shown"),
            NoticeLevel::Error => error!(title = %notice.title, message = %notice.message, "error notice shown"),
        }
        let _ = writeln!(std::io::stderr().lock(), "{}", format_notice(&notice));
    }
}
