//! Application state and the composing reducer.
//!
//! Each slice has its own reducer. [`AppReducer`] routes an intent to the
//! slice that owns it and leaves the other slice untouched.

pub mod overlay;
pub mod provider;

use serde::{Deserialize, Serialize};

use crate::mvi::{Intent, Reducer, Reduction, State};
use crate::task::Task;

pub use overlay::{OverlayIntent, OverlayReducer, OverlayState};
pub use provider::{ExportRequest, ProviderIntent, ProviderReducer, ProviderState, SuccessInfo};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub provider: ProviderState,
    pub overlay: OverlayState,
}

impl State for AppState {}

/// Any intent the application understands.
#[derive(Debug)]
pub enum AppIntent {
    Provider(ProviderIntent),
    Overlay(OverlayIntent),
}

impl Intent for AppIntent {}

impl From<ProviderIntent> for AppIntent {
    fn from(intent: ProviderIntent) -> Self {
        AppIntent::Provider(intent)
    }
}

impl From<OverlayIntent> for AppIntent {
    fn from(intent: OverlayIntent) -> Self {
        AppIntent::Overlay(intent)
    }
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;
    type Effect = Task;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Task> {
        let AppState { provider, overlay } = state;
        match intent {
            AppIntent::Provider(intent) => ProviderReducer::reduce(provider, intent)
                .map_state(|provider| AppState { provider, overlay }),
            AppIntent::Overlay(intent) => OverlayReducer::reduce(overlay, intent)
                .map_state(|overlay| AppState { provider, overlay }),
        }
    }
}
