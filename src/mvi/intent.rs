//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (export button, provider picker)
/// - Resolved tasks (upload responses, timers)
/// - Actions addressed to sibling state slices
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
