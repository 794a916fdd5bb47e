//! Modal and notification state.
//!
//! Owned by a sibling reducer; the provider reducer only talks to it by
//! dispatching [`OverlayIntent`]s through tasks.

mod intent;
mod reducer;
mod state;

pub use intent::OverlayIntent;
pub use reducer::OverlayReducer;
pub use state::{ModalId, Notification, OverlayState};
