//! Reducer for the provider state.

use std::path::Path;
use std::time::Duration;

use tracing::{error, warn};

use crate::mvi::{Reducer, Reduction};
use crate::provider::{
    ProviderError, ProviderHandle, UploadOptions, UploadRequest, UploadResponse,
};
use crate::state::overlay::{Notification, OverlayIntent};
use crate::task::{Hook, HookPayload, Task, UploadContext};

use super::intent::{ExportRequest, ProviderIntent};
use super::state::{ProviderState, SuccessInfo};

/// File name used when the export request carries none.
pub const DEFAULT_FILE_NAME: &str = "map";

/// How long a save notification stays up.
pub const NOTIFICATION_DISMISS_DELAY: Duration = Duration::from_millis(3000);

const DEFAULT_EXTENSION: &str = "json";

/// Reducer for provider state transitions.
///
/// Pure function: uploads, hook invocations and follow-up dispatches are
/// returned as [`Task`]s for the runner.
pub struct ProviderReducer;

impl Reducer for ProviderReducer {
    type State = ProviderState;
    type Intent = ProviderIntent;
    type Effect = Task;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Task> {
        match intent {
            ProviderIntent::ExportFileToCloud(request) => export_file_to_cloud(state, request),

            ProviderIntent::ExportFileSuccess {
                response,
                provider,
                options,
                on_success,
                close_modal,
            } => export_file_success(state, response, provider, options, on_success, close_modal),

            ProviderIntent::ExportFileError {
                error,
                provider,
                on_error,
            } => export_file_error(state, error, provider, on_error),

            ProviderIntent::PostSaveLoadSuccess { message } => post_save_load_success(state, message),

            ProviderIntent::ResetProviderStatus => Reduction::new(ProviderState {
                is_loading: false,
                error: None,
                success_info: SuccessInfo::default(),
                ..state
            }),

            ProviderIntent::SetCloudProvider(current_provider) => {
                Reduction::new(ProviderState {
                    current_provider,
                    ..state
                })
            }
        }
    }
}

/// Trim the name, fall back to [`DEFAULT_FILE_NAME`] and make sure it
/// carries an extension.
pub fn normalize_file_name(file_name: Option<&str>) -> String {
    let name = file_name.map(str::trim).filter(|n| !n.is_empty());
    match name {
        Some(name) if has_extension(name) => name.to_string(),
        Some(name) => format!("{}.{}", name, DEFAULT_EXTENSION),
        None => format!("{}.{}", DEFAULT_FILE_NAME, DEFAULT_EXTENSION),
    }
}

fn has_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}

/// Returns the provider when it is present and can upload. Failures are
/// logged, never returned.
fn validated_provider(provider: Option<ProviderHandle>) -> Option<ProviderHandle> {
    let Some(provider) = provider else {
        error!("provider is not defined");
        return None;
    };

    if provider.uploader().is_none() {
        error!(
            "upload_file is not a function of Cloud provider: {}",
            provider.name()
        );
        return None;
    }

    Some(provider)
}

fn provider_label(state: &ProviderState) -> &str {
    state.current_provider.as_deref().unwrap_or("cloud")
}

fn export_file_to_cloud(state: ProviderState, request: ExportRequest) -> Reduction<ProviderState, Task> {
    let ExportRequest {
        provider,
        map_data,
        blob,
        file_name,
        is_public,
        on_success,
        on_error,
        close_modal,
    } = request;

    let Some(provider) = validated_provider(provider) else {
        return Reduction::new(state);
    };

    let upload = UploadRequest {
        map_data,
        blob,
        file_name: normalize_file_name(file_name.as_deref()),
        is_public,
    };

    let state = ProviderState {
        is_loading: true,
        error: None,
        current_provider: Some(provider.name().to_string()),
        ..state
    };

    Reduction::new(state).with_effect(Task::Upload {
        provider,
        request: upload,
        context: UploadContext {
            on_success,
            on_error,
            close_modal,
        },
    })
}

fn export_file_success(
    state: ProviderState,
    response: UploadResponse,
    provider: ProviderHandle,
    options: UploadOptions,
    on_success: Option<Hook>,
    close_modal: bool,
) -> Reduction<ProviderState, Task> {
    let state = ProviderState {
        is_loading: false,
        error: None,
        success_info: SuccessInfo::from_response(&response),
        ..state
    };

    let saved_message = close_modal.then(|| format!("Map saved to {}!", provider_label(&state)));

    let callback = on_success.map(|hook| Task::Callback {
        hook,
        payload: HookPayload::Success {
            response,
            provider: provider.name().to_string(),
            options,
        },
    });
    let post_save = saved_message.map(|message| {
        Task::Dispatch(
            ProviderIntent::PostSaveLoadSuccess {
                message: Some(message),
            }
            .into(),
        )
    });

    Reduction::new(state).with_effects(callback.into_iter().chain(post_save))
}

fn export_file_error(
    state: ProviderState,
    error: ProviderError,
    provider: ProviderHandle,
    on_error: Option<Hook>,
) -> Reduction<ProviderState, Task> {
    let message = error.to_string();
    warn!(provider = provider.name(), error = %message, "export failed");

    let callback = on_error.map(|hook| Task::Callback {
        hook,
        payload: HookPayload::Failure {
            error: message.clone(),
            provider: provider.name().to_string(),
        },
    });

    let state = ProviderState {
        is_loading: false,
        error: Some(message),
        success_info: SuccessInfo::default(),
        ..state
    };

    Reduction::new(state).with_effects(callback)
}

fn post_save_load_success(state: ProviderState, message: Option<String>) -> Reduction<ProviderState, Task> {
    let message =
        message.unwrap_or_else(|| format!("Saved / Load to {} Success", provider_label(&state)));
    let note = Notification::new(message);
    let note_id = note.id.clone();

    Reduction::new(state).with_effects([
        Task::Dispatch(OverlayIntent::ToggleModal(None).into()),
        Task::Dispatch(ProviderIntent::ResetProviderStatus.into()),
        Task::Dispatch(OverlayIntent::AddNotification(note).into()),
        Task::Delay {
            duration: NOTIFICATION_DISMISS_DELAY,
            then: OverlayIntent::RemoveNotification(note_id).into(),
        },
    ])
}
