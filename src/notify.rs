//! User-facing failure notifications
//!
//! The pipeline fires this exactly once per failure envelope; callers still
//! receive the error and render their own feedback.

/// Notification sink injected into the request pipeline.
pub trait Notifier: Send + Sync {
    fn failure(&self, message: &str);
}

/// Default sink: routes notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn failure(&self, message: &str) {
        tracing::warn!("upstream failure: {}", message);
    }
}

/// Console sink used by the admin binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn failure(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
