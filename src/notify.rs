//! Notification surface
//!
//! One dismissible message at a time. Posting a new message replaces the
//! previous one; a message expires on its own after the configured delay.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Default lifetime of a message
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(5);

/// Visual level of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }
}

/// A posted message
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub message: String,
    pub level: AlertLevel,
    #[serde(skip)]
    pub posted_at: Instant,
}

/// Single-slot message holder
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Notification>,
    expiry: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRY)
    }
}

impl Notifier {
    pub fn new(expiry: Duration) -> Self {
        Self {
            current: None,
            expiry,
        }
    }

    /// Post a message, replacing whatever was shown
    pub fn show(&mut self, message: impl Into<String>, level: AlertLevel) {
        let message = message.into();
        tracing::debug!(level = level.as_str(), message = %message, "Notification posted");
        self.current = Some(Notification {
            message,
            level,
            posted_at: Instant::now(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, AlertLevel::Success);
    }

    pub fn danger(&mut self, message: impl Into<String>) {
        self.show(message, AlertLevel::Danger);
    }

    /// The message still visible at `now`, if any
    pub fn current_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.posted_at) < self.expiry)
    }

    /// The message visible right now
    pub fn current(&self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    /// Close the current message
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }
}
