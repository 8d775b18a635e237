// File: src/notification.rs
// Purpose: Toast notifications with single-slot replacement and timed dismissal

use crate::config::NotificationConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// Toast background colour
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
            NotificationKind::Info => "#3498db",
        }
    }

    /// Class list of the toast element (`notification notification-success`)
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }
}

/// Something that can put a toast in front of the user
pub trait Notifier {
    /// Shows `notification` at `now_ms`, replacing any toast already on screen
    fn notify(&mut self, notification: Notification, now_ms: u64);
}

/// Lifecycle stage of the current toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveToast {
    notification: Notification,
    shown_at: u64,
}

/// Holds at most one toast and works out its phase from caller-supplied timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenter {
    visible_ms: u64,
    exit_ms: u64,
    current: Option<ActiveToast>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

impl NotificationCenter {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            visible_ms: config.visible_ms,
            exit_ms: config.exit_ms,
            current: None,
        }
    }

    /// Time from showing until the toast starts leaving
    pub fn visible_ms(&self) -> u64 {
        self.visible_ms
    }

    /// Time from showing until the toast is gone
    pub fn lifetime_ms(&self) -> u64 {
        self.visible_ms.saturating_add(self.exit_ms)
    }

    /// The toast on screen at `now_ms`, if any
    pub fn current(&self, now_ms: u64) -> Option<&Notification> {
        self.phase(now_ms)
            .and(self.current.as_ref())
            .map(|toast| &toast.notification)
    }

    pub fn phase(&self, now_ms: u64) -> Option<ToastPhase> {
        let toast = self.current.as_ref()?;
        let age = now_ms.saturating_sub(toast.shown_at);
        if age < self.visible_ms {
            Some(ToastPhase::Visible)
        } else if age < self.lifetime_ms() {
            Some(ToastPhase::Leaving)
        } else {
            None
        }
    }

    /// Drops an expired toast; returns whether one was removed
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.current.is_some() && self.phase(now_ms).is_none() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification, now_ms: u64) {
        if let Some(previous) = self.current.take() {
            tracing::trace!(message = %previous.notification.message, "toast replaced");
        }
        tracing::debug!(kind = notification.kind.as_str(), message = %notification.message, "toast shown");
        self.current = Some(ActiveToast {
            notification,
            shown_at: now_ms,
        });
    }
}
