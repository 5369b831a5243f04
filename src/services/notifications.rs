use tokio::sync::broadcast;

use crate::errors::AppError;
use crate::models::{Notice, NoticeLevel};

/// Shared alert channel. Every failed upstream call is reported here, and the
/// front-end listens on the SSE route to show toasts.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            level,
            message: message.into(),
            created_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        // No subscribers is fine
        let _ = self.tx.send(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Success, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Warning, message);
    }

    /// Reports a failed operation and hands back the message for inline display.
    pub fn handle_error(&self, err: &AppError) -> String {
        let message = err.to_string();
        tracing::warn!(error = %message, "operation failed");
        self.notify(NoticeLevel::Error, message.clone());
        message
    }

    /// Passes `result` through, reporting it first when it is an error.
    pub fn report<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        result.inspect_err(|e| {
            self.handle_error(e);
        })
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}
