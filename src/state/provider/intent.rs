//! Intents for the provider state.

use serde_json::Value;

use crate::mvi::Intent;
use crate::provider::{ProviderError, ProviderHandle, UploadOptions, UploadResponse};
use crate::task::Hook;

/// Export requested by the user.
///
/// `provider` is optional because the UI may fire the request before a
/// provider has been picked; the reducer rejects that case.
#[derive(Debug, Default)]
pub struct ExportRequest {
    pub provider: Option<ProviderHandle>,
    pub map_data: Value,
    pub blob: Option<Vec<u8>>,
    pub file_name: Option<String>,
    pub is_public: bool,
    pub on_success: Option<Hook>,
    pub on_error: Option<Hook>,
    /// Close the export modal and show a notification once saved.
    pub close_modal: bool,
}

impl ExportRequest {
    pub fn new(provider: ProviderHandle, map_data: Value) -> Self {
        Self {
            provider: Some(provider),
            map_data,
            ..Self::default()
        }
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn blob(mut self, blob: Vec<u8>) -> Self {
        self.blob = Some(blob);
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn on_success(mut self, hook: Hook) -> Self {
        self.on_success = Some(hook);
        self
    }

    pub fn on_error(mut self, hook: Hook) -> Self {
        self.on_error = Some(hook);
        self
    }

    pub fn close_modal(mut self, close_modal: bool) -> Self {
        self.close_modal = close_modal;
        self
    }
}

/// Intents that can be dispatched to the provider reducer.
#[derive(Debug)]
pub enum ProviderIntent {
    /// Start an export.
    ExportFileToCloud(ExportRequest),

    /// The upload task resolved successfully.
    ExportFileSuccess {
        response: UploadResponse,
        provider: ProviderHandle,
        options: UploadOptions,
        on_success: Option<Hook>,
        close_modal: bool,
    },

    /// The upload task failed.
    ExportFileError {
        error: ProviderError,
        provider: ProviderHandle,
        on_error: Option<Hook>,
    },

    /// Close the modal, reset status and flash a notification.
    PostSaveLoadSuccess { message: Option<String> },

    /// Clear loading, error and success info.
    ResetProviderStatus,

    /// Select a provider by name.
    SetCloudProvider(Option<String>),
}

impl Intent for ProviderIntent {}
