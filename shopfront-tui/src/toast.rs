//! Toast queue — transient notifications drawn over the active panel.
//!
//! Toasts auto-dismiss after a fixed duration; the queue is ticked from the
//! event loop and capped so a burst of actions cannot flood the screen.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_VISIBLE: usize = 4;
const DEFAULT_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push_back(Toast {
            message: message.into(),
            level,
            deadline: Instant::now() + DEFAULT_DURATION,
        });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts. Called once per event-loop iteration.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| t.deadline > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    fn expire_all(&mut self) {
        let past = Instant::now() - Duration::from_secs(1);
        for t in &mut self.toasts {
            t.deadline = past;
        }
    }
}
