//! Deferred side-effect descriptors.
//!
//! Reducers never perform IO. When a transition needs asynchronous work it
//! returns a [`Task`] next to the new state; the [`TaskRunner`] executes it
//! later and turns the outcome into a new [`AppIntent`].
//!
//! [`TaskRunner`]: crate::runner::TaskRunner

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::provider::{ProviderHandle, UploadOptions, UploadRequest, UploadResponse};
use crate::state::AppIntent;

/// Argument passed to a caller-supplied [`Hook`].
#[derive(Debug, Clone, PartialEq)]
pub enum HookPayload {
    /// Upload finished.
    Success {
        response: UploadResponse,
        provider: String,
        options: UploadOptions,
    },
    /// Upload failed with the given display message.
    Failure { error: String, provider: String },
}

type HookFn = dyn Fn(HookPayload) -> Option<AppIntent> + Send + Sync;

/// Caller-supplied action creator run by a callback task.
///
/// Whatever intent it returns is dispatched like any other resolved task.
#[derive(Clone)]
pub struct Hook(Arc<HookFn>);

impl Hook {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(HookPayload) -> Option<AppIntent> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, payload: HookPayload) -> Option<AppIntent> {
        (self.0)(payload)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// Follow-up wiring for an upload, carried until the upload resolves.
#[derive(Debug, Clone, Default)]
pub struct UploadContext {
    pub on_success: Option<Hook>,
    pub on_error: Option<Hook>,
    pub close_modal: bool,
}

/// A deferred side effect.
#[derive(Debug)]
pub enum Task {
    /// Upload through the provider's uploader; resolves to a success or
    /// error intent.
    Upload {
        provider: ProviderHandle,
        request: UploadRequest,
        context: UploadContext,
    },
    /// Invoke a caller hook.
    Callback { hook: Hook, payload: HookPayload },
    /// Dispatch an intent as soon as the task is run.
    Dispatch(AppIntent),
    /// Dispatch an intent after a pause.
    Delay { duration: Duration, then: AppIntent },
}

/// Discriminant of a [`Task`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Upload,
    Callback,
    Dispatch,
    Delay,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Upload => write!(f, "upload"),
            TaskKind::Callback => write!(f, "callback"),
            TaskKind::Dispatch => write!(f, "dispatch"),
            TaskKind::Delay => write!(f, "delay"),
        }
    }
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Upload { .. } => TaskKind::Upload,
            Task::Callback { .. } => TaskKind::Callback,
            Task::Dispatch(_) => TaskKind::Dispatch,
            Task::Delay { .. } => TaskKind::Delay,
        }
    }
}
