//! Ephemeral user-facing notifications.
//!
//! DESIGN
//! ======
//! The queue is plain data keyed by caller-supplied millisecond timestamps, so
//! expiry is deterministic under test. The browser layer runs one sweep loop:
//! `sweep` drops what is due and says how long to sleep before the next call.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a notification stays visible.
pub const DEFAULT_ALERT_TTL_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    /// Key resolved to display text by `util::alerts::message_for`.
    pub message_key: String,
    pub created_at_ms: u64,
}

impl Notification {
    #[must_use]
    pub fn expires_at_ms(&self, ttl_ms: u64) -> u64 {
        self.created_at_ms.saturating_add(ttl_ms)
    }
}

/// Insertion-ordered set of active notifications.
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    ttl_ms: u64,
    next_id: u64,
    items: Vec<Notification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_TTL_MS)
    }
}

impl NotificationQueue {
    #[must_use]
    pub fn new(ttl_ms: u64) -> Self {
        Self { ttl_ms, next_id: 0, items: Vec::new() }
    }

    /// Append a notification created at `now_ms`.
    pub fn show_at(&mut self, kind: NotificationKind, message_key: impl Into<String>, now_ms: u64) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification { id, kind, message_key: message_key.into(), created_at_ms: now_ms });
        id
    }

    /// Remove one notification. Returns false if it already expired.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification whose lifetime has elapsed at `now_ms`.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let ttl = self.ttl_ms;
        let before = self.items.len();
        self.items.retain(|n| n.expires_at_ms(ttl) > now_ms);
        before - self.items.len()
    }

    /// Active notifications in display order.
    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Earliest pending expiry, if any.
    #[must_use]
    pub fn next_expiry_ms(&self) -> Option<u64> {
        self.items.iter().map(|n| n.expires_at_ms(self.ttl_ms)).min()
    }

    /// Expire everything due at `now_ms` and return the delay until the next
    /// expiry, or `None` once the queue is empty.
    pub fn sweep(&mut self, now_ms: u64) -> Option<u64> {
        self.expire(now_ms);
        self.next_expiry_ms().map(|at| at.saturating_sub(now_ms))
    }
}
