//! Reducer for modals and notifications.

use crate::mvi::{Reducer, Reduction};
use crate::task::Task;

use super::intent::OverlayIntent;
use super::state::OverlayState;

/// Pure reducer; never emits tasks.
pub struct OverlayReducer;

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;
    type Effect = Task;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Task> {
        let state = match intent {
            OverlayIntent::ToggleModal(modal) => OverlayState { modal, ..state },

            OverlayIntent::AddNotification(note) => {
                let mut notifications = state.notifications;
                // Re-adding an id replaces the old entry.
                notifications.retain(|n| n.id != note.id);
                notifications.push(note);
                OverlayState {
                    notifications,
                    ..state
                }
            }

            OverlayIntent::RemoveNotification(id) => {
                let mut notifications = state.notifications;
                notifications.retain(|n| n.id != id);
                OverlayState {
                    notifications,
                    ..state
                }
            }
        };
        Reduction::new(state)
    }
}
