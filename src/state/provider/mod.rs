//! Provider state feature module.
//!
//! Tracks the cloud export lifecycle: export requested, upload in flight,
//! success metadata or error message.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `ProviderState` and normalized `SuccessInfo`
//! - `intent.rs` - Export requests and resolved upload results
//! - `reducer.rs` - State transitions and emitted tasks

mod intent;
mod reducer;
mod state;

pub use intent::{ExportRequest, ProviderIntent};
pub use reducer::{normalize_file_name, ProviderReducer, DEFAULT_FILE_NAME, NOTIFICATION_DISMISS_DELAY};
pub use state::{ProviderState, SuccessInfo};
