//! Cloud provider abstraction.
//!
//! A provider is a pluggable cloud-storage integration. The reducer only
//! needs [`CloudProvider::name`] and the upload capability exposed through
//! [`CloudProvider::uploader`]; the remaining methods serve the surrounding
//! application (provider pickers, login buttons).

mod error;
pub mod local;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::ProviderError;
pub use local::LocalFolderProvider;

/// Shared handle to a provider, cheap to clone into intents and tasks.
pub type ProviderHandle = Arc<dyn CloudProvider>;

/// Normalized payload handed to [`FileUploader::upload_file`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    /// Serialized map (datasets, config, info).
    pub map_data: Value,
    /// Optional binary attachment, e.g. a thumbnail.
    pub blob: Option<Vec<u8>>,
    /// File name including extension.
    pub file_name: String,
    /// Whether the upload should be shareable.
    pub is_public: bool,
}

impl UploadRequest {
    pub fn options(&self) -> UploadOptions {
        UploadOptions {
            file_name: self.file_name.clone(),
            is_public: self.is_public,
        }
    }
}

/// Upload options echoed back to success hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOptions {
    pub file_name: String,
    pub is_public: bool,
}

/// Raw provider response. Every field is optional; providers report what
/// they know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Link to the uploaded file (share link for public uploads).
    #[serde(default)]
    pub url: Option<String>,
    /// Link to the folder containing the upload.
    #[serde(default)]
    pub folder_link: Option<String>,
}

/// Upload capability of a provider.
#[async_trait]
pub trait FileUploader: Send + Sync {
    /// Upload a file and return the provider's response.
    async fn upload_file(&self, request: UploadRequest) -> Result<UploadResponse, ProviderError>;
}

/// A cloud-storage integration.
#[async_trait]
pub trait CloudProvider: Send + Sync + fmt::Debug {
    /// Unique identifier (e.g., "dropbox", "local").
    fn name(&self) -> &str;

    /// Display name in UI.
    fn display_name(&self) -> &str;

    /// Icon identifier, if the provider has one.
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Start an authenticated session.
    async fn login(&self) -> Result<(), ProviderError>;

    /// End the authenticated session.
    async fn logout(&self) -> Result<(), ProviderError>;

    /// Whether uploads can be kept private.
    fn has_private_storage(&self) -> bool;

    /// Whether the provider returns shareable links.
    fn has_sharing_url(&self) -> bool;

    /// Upload capability. `None` means this provider cannot export files.
    fn uploader(&self) -> Option<&dyn FileUploader> {
        None
    }
}
