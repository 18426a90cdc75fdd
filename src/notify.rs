//! Outcome notifications, the seam to the external message/toast widget.

use tracing::{info, warn};

/// Surface for user-facing operation outcomes.
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Production notifier: structured log lines stand in for toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(outcome = "success", "{message}");
    }

    fn failure(&self, message: &str) {
        warn!(outcome = "failure", "{message}");
    }
}
