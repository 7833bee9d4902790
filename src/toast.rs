//! Toast Notifications
//!
//! Bounded, newest-first queue of transient messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Toast content before it is queued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// A queued toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: ToastMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    limit: usize,
    next_id: u32,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    /// Add a toast in front, evicting the oldest beyond the limit. Returns its id.
    pub fn push(&mut self, message: ToastMessage) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.insert(0, Toast { id, message });
        self.toasts.truncate(self.limit);
        id
    }

    /// Remove a toast by id; false when it was already gone
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_limited() {
        let mut queue = ToastQueue::new(2);
        queue.push(ToastMessage::info("a", ""));
        queue.push(ToastMessage::info("b", ""));
        queue.push(ToastMessage::error("c", ""));

        let titles: Vec<&str> = queue.visible().iter().map(|t| t.message.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
        assert_eq!(queue.visible()[0].message.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::new(3);
        let first = queue.push(ToastMessage::info("a", ""));
        let second = queue.push(ToastMessage::info("b", ""));
        assert_ne!(first, second);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].id, second);
    }

    #[test]
    fn test_evicted_toast_dismiss_is_noop() {
        let mut queue = ToastQueue::new(1);
        let old = queue.push(ToastMessage::info("old", ""));
        queue.push(ToastMessage::info("new", ""));
        assert!(!queue.dismiss(old));
        assert_eq!(queue.visible()[0].message.title, "new");
    }

    #[test]
    fn test_zero_limit_clamps_to_one() {
        let mut queue = ToastQueue::new(0);
        queue.push(ToastMessage::info("a", ""));
        assert_eq!(queue.visible().len(), 1);
    }
}
