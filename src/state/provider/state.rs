//! State for cloud provider exports.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mvi::State;
use crate::provider::UploadResponse;

/// Normalized result metadata from a completed upload.
///
/// The default value (no fields) is the empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_link: Option<String>,
}

impl SuccessInfo {
    pub fn from_response(response: &UploadResponse) -> Self {
        Self {
            meta_url: response.url.clone(),
            folder_link: response.folder_link.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meta_url.is_none() && self.folder_link.is_none()
    }
}

/// Export lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderState {
    /// True between an accepted export and its resolution.
    pub is_loading: bool,
    /// Display message of the last failed upload.
    pub error: Option<String>,
    /// Name of the provider last selected or exported to.
    pub current_provider: Option<String>,
    pub success_info: SuccessInfo,
    /// Map state handed over by a provider, kept as-is by every transition.
    pub initial_state: Map<String, Value>,
}

impl State for ProviderState {}

impl ProviderState {
    pub fn with_current_provider(mut self, provider: impl Into<String>) -> Self {
        self.current_provider = Some(provider.into());
        self
    }

    pub fn with_initial_state(mut self, initial_state: Map<String, Value>) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
