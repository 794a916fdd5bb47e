//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between intents, state and deferred tasks.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State
//!    ↑          │
//!    │          └──→ Effects ──→ TaskRunner
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of application state
//! - **Intent**: User actions or resolved task results
//! - **Reducer**: Pure function that transforms state and lists the effects
//!   the caller must run

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Reduction};
pub use state::State;
