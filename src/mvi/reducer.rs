//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::State;

/// Result of a single reducer step: the next state plus the effects
/// the caller has to execute, in order.
#[derive(Debug)]
pub struct Reduction<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Reduction<S, E> {
    /// A transition with no side effects.
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Append one effect.
    pub fn with_effect(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append several effects, preserving their order.
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = E>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Map the state while keeping the effects.
    ///
    /// Used by composing reducers to lift a slice reduction into the
    /// parent state.
    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> Reduction<T, E> {
        Reduction {
            state: f(self.state),
            effects: self.effects,
        }
    }

    pub fn into_parts(self) -> (S, Vec<E>) {
        (self.state, self.effects)
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, [Effect]).
/// Effects are descriptors; running them is the caller's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect descriptor type this reducer emits.
    type Effect;

    /// Process an intent and return the new state with its effects.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect>;
}
