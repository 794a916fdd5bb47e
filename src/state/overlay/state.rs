//! State for modals and notifications.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mvi::State;

/// Modals the export flow can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalId {
    SaveMap,
    ShareMap,
}

/// A transient banner shown after a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
}

impl Notification {
    /// Create a notification with a fresh id.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    /// Currently open modal, if any.
    pub modal: Option<ModalId>,
    /// Visible notifications, oldest first.
    pub notifications: Vec<Notification>,
}

impl State for OverlayState {}

impl OverlayState {
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_get_unique_ids() {
        let a = Notification::new("a");
        let b = Notification::new("a");
        assert_ne!(a.id, b.id);
        assert_eq!(a.message, b.message);
    }
}
