//! Shared test utilities: stub providers and a log-capturing subscriber.

#![allow(dead_code, unused_imports)]

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cloudexport::provider::{
    CloudProvider, FileUploader, ProviderError, ProviderHandle, UploadRequest, UploadResponse,
};
use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// What a [`StubProvider`] answers to an upload.
#[derive(Debug, Clone)]
pub enum StubOutcome {
    Respond(UploadResponse),
    Fail(String),
}

/// Provider with a canned upload outcome that records every request.
#[derive(Debug)]
pub struct StubProvider {
    name: String,
    outcome: StubOutcome,
    uploads: Mutex<Vec<UploadRequest>>,
}

impl StubProvider {
    pub fn responding(name: &str, response: UploadResponse) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome: StubOutcome::Respond(response),
            uploads: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(name: &str, message: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome: StubOutcome::Fail(message.to_string()),
            uploads: Mutex::new(Vec::new()),
        })
    }

    pub fn uploads(&self) -> Vec<UploadRequest> {
        self.uploads.lock().clone()
    }
}

#[async_trait]
impl FileUploader for StubProvider {
    async fn upload_file(&self, request: UploadRequest) -> Result<UploadResponse, ProviderError> {
        self.uploads.lock().push(request);
        match &self.outcome {
            StubOutcome::Respond(response) => Ok(response.clone()),
            StubOutcome::Fail(message) => Err(ProviderError::message(message.clone())),
        }
    }
}

#[async_trait]
impl CloudProvider for StubProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    async fn login(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn logout(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    fn has_private_storage(&self) -> bool {
        false
    }

    fn has_sharing_url(&self) -> bool {
        true
    }

    fn uploader(&self) -> Option<&dyn FileUploader> {
        Some(self)
    }
}

/// Provider without the upload capability.
#[derive(Debug)]
pub struct ReadOnlyProvider {
    pub name: String,
}

#[async_trait]
impl CloudProvider for ReadOnlyProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    async fn login(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn logout(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    fn has_private_storage(&self) -> bool {
        false
    }

    fn has_sharing_url(&self) -> bool {
        false
    }
}

pub fn read_only(name: &str) -> ProviderHandle {
    Arc::new(ReadOnlyProvider {
        name: name.to_string(),
    })
}

/// Log events recorded by [`capture_logs`].
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

impl CapturedLogs {
    pub fn errors(&self) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter(|(level, _)| *level == Level::ERROR)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0.lock().push((*event.metadata().level(), visitor.0));
    }
}

/// Run `f` with a subscriber that records every event.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(logs.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs)
}
