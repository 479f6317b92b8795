use crate::port::Notifier;
use std::sync::{Mutex, PoisonError};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Collects the toasts raised while handling one request so the rendered
/// page can show them.
#[derive(Debug, Default)]
pub struct ToastQueue(Mutex<Vec<Toast>>);

impl ToastQueue {
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, level: ToastLevel, message: &str) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Toast {
                level,
                message: message.into(),
            });
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let queue = ToastQueue::default();
        queue.success("done");
        queue.error("failed");

        let toasts = queue.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].level, ToastLevel::Success);
        assert_eq!(toasts[1].level.to_string(), "error");
        assert!(queue.drain().is_empty());
    }
}
