/// Success/error notifications
///
/// The toast equivalent of the console: short-lived messages rendered on
/// the status line. Every operation outcome produces exactly one notice;
/// stale ones are pruned on tick.

use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    at: Instant,
}

/// Notification queue with a fixed TTL
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Notices { items: Vec::new() }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        self.items.push(Notice {
            kind,
            text,
            at: Instant::now(),
        });
    }

    /// Drops notices older than the TTL
    pub fn prune(&mut self) {
        self.items.retain(|n| n.at.elapsed() < NOTICE_TTL);
    }

    /// The most recent live notice, for the status line
    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_returns_most_recent() {
        let mut notices = Notices::new();
        assert!(notices.latest().is_none());

        notices.success("Tarea creada correctamente");
        notices.error("Error al crear la tarea");

        let latest = notices.latest().unwrap();
        assert_eq!(latest.kind, NoticeKind::Error);
        assert_eq!(latest.text, "Error al crear la tarea");
    }

    #[test]
    fn test_prune_keeps_fresh_notices() {
        let mut notices = Notices::new();
        notices.success("Usuario creado correctamente");
        notices.prune();
        assert!(notices.latest().is_some());
    }
}
