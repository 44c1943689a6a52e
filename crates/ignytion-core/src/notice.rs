//! Transient toast notices
//!
//! Views produce [`Notice`] values; the chrome owns a [`NoticeBoard`] that
//! keeps them in push order until they are dismissed.

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A single toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// Identifier handed out by [`NoticeBoard::push`]
pub type NoticeId = u64;

/// Ordered queue of visible notices
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    entries: Vec<(NoticeId, Notice)>,
    next_id: NoticeId,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, returning the id used to dismiss it later
    pub fn push(&mut self, notice: Notice) -> NoticeId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, notice));
        id
    }

    /// Remove one notice; unknown ids are ignored since timers may race a click
    pub fn dismiss(&mut self, id: NoticeId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn entries(&self) -> &[(NoticeId, Notice)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut board = NoticeBoard::new();
        board.push(Notice::success("one"));
        board.push(Notice::error("two"));
        board.push(Notice::info("three"));

        let messages: Vec<_> = board.entries().iter().map(|(_, n)| n.message.as_str()).collect();
        assert_eq!(messages, ["one", "two", "three"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut board = NoticeBoard::new();
        let a = board.push(Notice::info("a"));
        board.dismiss(a);
        let b = board.push(Notice::info("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut board = NoticeBoard::new();
        let a = board.push(Notice::info("a"));
        let b = board.push(Notice::info("b"));
        let c = board.push(Notice::info("c"));

        board.dismiss(b);

        let ids: Vec<_> = board.entries().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [a, c]);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut board = NoticeBoard::new();
        board.push(Notice::info("a"));
        board.dismiss(42);
        assert_eq!(board.len(), 1);
        assert!(!board.is_empty());
    }
}
