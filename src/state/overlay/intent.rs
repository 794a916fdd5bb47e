//! Intents for modals and notifications.

use crate::mvi::Intent;

use super::state::{ModalId, Notification};

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayIntent {
    /// Open a modal, or close the current one with `None`.
    ToggleModal(Option<ModalId>),

    AddNotification(Notification),

    /// Remove a notification by id. Unknown ids are ignored.
    RemoveNotification(String),
}

impl Intent for OverlayIntent {}
