//! User-facing notices for calculator operations.
//!
//! The calculator only needs to say whether an operation succeeded or
//! failed; how that is shown (a toast, a terminal line) belongs to the
//! `Notifier` implementation.

use crate::errors::RoiError;
use crate::formatting::OutputFormatter;
use crate::report::ExportFormat;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn export_succeeded(format: ExportFormat, destination: &str) -> Self {
        let title = match format {
            ExportFormat::Pdf => "PDF Generated Successfully",
            ExportFormat::Markdown | ExportFormat::Json => "Report Generated Successfully",
        };
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            description: format!("Your ROI analysis has been downloaded ({destination})."),
        }
    }

    pub fn export_failed(error: &RoiError) -> Self {
        let title = match error {
            RoiError::NoResultsAvailable => "Nothing to export",
            _ => "Export failed",
        };
        Self {
            kind: NoticeKind::Failure,
            title: title.to_string(),
            description: error.to_string(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Prints notices to stderr.
pub struct TerminalNotifier {
    formatter: Box<dyn OutputFormatter>,
}

impl TerminalNotifier {
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    pub fn render(&self, notice: &Notice) -> String {
        let title = match notice.kind {
            NoticeKind::Success => self.formatter.success(&notice.title),
            NoticeKind::Failure => self.formatter.error(&notice.title),
        };
        format!("{}: {}", title, self.formatter.dim(&notice.description))
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("{}", self.render(notice));
    }
}

/// Keeps every notice, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("Mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices
            .lock()
            .expect("Mutex poisoned")
            .push(notice.clone());
    }
}
