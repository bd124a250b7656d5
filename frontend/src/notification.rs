//! The one notification capability every component talks to.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationLevel::Info => "alert-info",
            NotificationLevel::Success => "alert-success",
            NotificationLevel::Warning => "alert-warning",
            NotificationLevel::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    TopRight,
    BottomLeft,
}

impl Placement {
    pub fn css_class(self) -> &'static str {
        match self {
            Placement::TopRight => "toast-stack top-right",
            Placement::BottomLeft => "toast-stack bottom-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub placement: Placement,
    pub ttl_ms: u32,
}

impl Notification {
    /// General banner, top right.
    pub fn new(message: impl Into<String>, level: NotificationLevel, ttl_ms: u32) -> Self {
        Self {
            message: message.into(),
            level,
            placement: Placement::TopRight,
            ttl_ms,
        }
    }

    /// Discreet data-update note, bottom left.
    pub fn data_update(message: impl Into<String>, ttl_ms: u32) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            placement: Placement::BottomLeft,
            ttl_ms,
        }
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Fallback used when no toast surface is mounted: the message goes to the
/// console instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Danger => log::error!("{}", notification.message),
            NotificationLevel::Warning => log::warn!("{}", notification.message),
            NotificationLevel::Info | NotificationLevel::Success => {
                log::info!("{:?}: {}", notification.level, notification.message)
            }
        }
    }
}
