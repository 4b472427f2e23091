use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Loading,
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    /// How long a settled notice stays on screen. Loading notices stay until updated.
    pub fn auto_close(&self) -> Option<Duration> {
        match self {
            Self::Loading => None,
            Self::Info => Some(Duration::from_millis(3000)),
            Self::Success | Self::Warning => Some(Duration::from_millis(4000)),
            Self::Error => Some(Duration::from_millis(5000)),
        }
    }
}

/// Display time of a loading notice once it has been settled, whatever its new kind.
pub const SETTLED_AUTO_CLOSE: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

/// Transient user-facing notifications. Calls are fire-and-forget.
pub trait Notifier {
    fn show(&self, kind: NoticeKind, message: &str) -> NoticeId;
    fn update(&self, id: NoticeId, message: &str, kind: NoticeKind);
}
