//! In-terminal success notification

use super::traits::Notifier;
use std::time::{Duration, Instant};

/// How long a toast stays up unless configured otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4500);

/// A visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: Instant,
}

impl Toast {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// Notifier that keeps the latest toast for the UI to draw
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    current: Option<Toast>,
    ttl: Duration,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastNotifier {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Toast to draw, if one is still up
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once its time is up
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(|t| t.is_expired(self.ttl)) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Notifier for ToastNotifier {
    fn success(&mut self, title: &str, description: &str) {
        tracing::debug!("Showing toast: {title}");
        self.current = Some(Toast {
            title: title.to_string(),
            description: description.to_string(),
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sets_toast() {
        let mut toasts = ToastNotifier::default();
        assert!(toasts.current().is_none());
        toasts.success("Done", "All good");
        let toast = toasts.current().unwrap();
        assert_eq!(toast.title, "Done");
        assert_eq!(toast.description, "All good");
    }

    #[test]
    fn test_tick_keeps_fresh_toast() {
        let mut toasts = ToastNotifier::new(Duration::from_secs(60));
        toasts.success("Done", "");
        toasts.tick();
        assert!(toasts.current().is_some());
    }

    #[test]
    fn test_tick_clears_expired_toast() {
        let mut toasts = ToastNotifier::new(Duration::ZERO);
        toasts.success("Done", "");
        toasts.tick();
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = ToastNotifier::default();
        toasts.success("Done", "");
        toasts.dismiss();
        assert!(toasts.current().is_none());
    }
}
