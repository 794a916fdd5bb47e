//! Executes deferred tasks.
//!
//! The runner owns no state. Each task resolves to at most one intent,
//! which the caller feeds back into the reducer.

use tracing::{debug, info};

use crate::provider::{ProviderError, ProviderHandle, UploadRequest};
use crate::state::{AppIntent, ProviderIntent};
use crate::task::{Task, UploadContext};

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskRunner;

impl TaskRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run one task and return the intent it resolves to, if any.
    pub async fn execute(&self, task: Task) -> Option<AppIntent> {
        let kind = task.kind();
        debug!(task = %kind, "executing task");

        match task {
            Task::Upload {
                provider,
                request,
                context,
            } => Some(upload(provider, request, context).await),

            Task::Callback { hook, payload } => hook.call(payload),

            Task::Dispatch(intent) => Some(intent),

            Task::Delay { duration, then } => {
                tokio::time::sleep(duration).await;
                Some(then)
            }
        }
    }
}

async fn upload(provider: ProviderHandle, request: UploadRequest, context: UploadContext) -> AppIntent {
    let options = request.options();
    let UploadContext {
        on_success,
        on_error,
        close_modal,
    } = context;

    let result = match provider.uploader() {
        Some(uploader) => uploader.upload_file(request).await,
        None => Err(ProviderError::Unsupported {
            provider: provider.name().to_string(),
        }),
    };

    match result {
        Ok(response) => {
            info!(provider = provider.name(), url = ?response.url, "upload succeeded");
            ProviderIntent::ExportFileSuccess {
                response,
                provider,
                options,
                on_success,
                close_modal,
            }
            .into()
        }
        Err(error) => ProviderIntent::ExportFileError {
            error,
            provider,
            on_error,
        }
        .into(),
    }
}
