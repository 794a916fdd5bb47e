//! Filesystem-backed provider.
//!
//! Stores uploads below a root directory, split into `public/` and
//! `private/` folders by visibility. Useful for offline exports and as
//! the reference provider for tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::ProviderConfig;

use super::{CloudProvider, FileUploader, ProviderError, UploadRequest, UploadResponse};

const PUBLIC_DIR: &str = "public";
const PRIVATE_DIR: &str = "private";

#[derive(Debug)]
pub struct LocalFolderProvider {
    name: String,
    display_name: String,
    icon: Option<String>,
    root: PathBuf,
    sharing_base_url: Option<String>,
    logged_in: Mutex<bool>,
}

impl LocalFolderProvider {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            icon: None,
            root: root.into(),
            sharing_base_url: None,
            logged_in: Mutex::new(false),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        let mut provider = Self::new(config.name.clone(), config.root.clone());
        if let Some(display_name) = &config.display_name {
            provider = provider.with_display_name(display_name.clone());
        }
        if let Some(icon) = &config.icon {
            provider = provider.with_icon(icon.clone());
        }
        if let Some(url) = &config.sharing_base_url {
            provider = provider.with_sharing_base_url(url.clone());
        }
        provider
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Base URL under which public uploads are served.
    pub fn with_sharing_base_url(mut self, url: impl Into<String>) -> Self {
        self.sharing_base_url = Some(url.into());
        self
    }

    pub fn is_logged_in(&self) -> bool {
        *self.logged_in.lock()
    }

    fn share_url(&self, file_name: &str) -> Option<String> {
        self.sharing_base_url
            .as_deref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), file_name))
    }
}

/// `file://` URL of `path`, resolved against the working directory when
/// relative.
fn file_url(path: &Path) -> String {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", path.display())
}

/// Rejects names that would escape the target folder.
fn validate_file_name(file_name: &str) -> Result<(), ProviderError> {
    let plain = Path::new(file_name)
        .file_name()
        .is_some_and(|name| name == file_name);
    if plain {
        Ok(())
    } else {
        Err(ProviderError::message(format!(
            "Invalid file name '{}'",
            file_name
        )))
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), ProviderError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[async_trait]
impl FileUploader for LocalFolderProvider {
    async fn upload_file(&self, request: UploadRequest) -> Result<UploadResponse, ProviderError> {
        if !self.is_logged_in() {
            return Err(ProviderError::NotLoggedIn {
                provider: self.name.clone(),
            });
        }
        validate_file_name(&request.file_name)?;

        let folder = self.root.join(if request.is_public {
            PUBLIC_DIR
        } else {
            PRIVATE_DIR
        });
        tokio::fs::create_dir_all(&folder)
            .await
            .map_err(|source| ProviderError::Io {
                path: folder.clone(),
                source,
            })?;

        let path = folder.join(&request.file_name);
        let body = serde_json::to_vec_pretty(&request.map_data)?;

        // The map is written last so a failed upload leaves nothing behind.
        let blob_path = match &request.blob {
            Some(blob) => {
                let blob_path = folder.join(format!("{}.bin", request.file_name));
                write_file(&blob_path, blob).await?;
                debug!(path = %blob_path.display(), bytes = blob.len(), "wrote blob");
                Some(blob_path)
            }
            None => None,
        };

        if let Err(err) = write_file(&path, &body).await {
            if let Some(blob_path) = &blob_path {
                if let Err(cleanup) = tokio::fs::remove_file(blob_path).await {
                    warn!(path = %blob_path.display(), error = %cleanup, "failed to remove blob");
                }
            }
            return Err(err);
        }

        info!(
            provider = %self.name,
            path = %path.display(),
            public = request.is_public,
            "upload stored"
        );

        let url = if request.is_public {
            self.share_url(&request.file_name)
                .unwrap_or_else(|| file_url(&path))
        } else {
            file_url(&path)
        };

        Ok(UploadResponse {
            url: Some(url),
            folder_link: Some(file_url(&folder)),
        })
    }
}

#[async_trait]
impl CloudProvider for LocalFolderProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    async fn login(&self) -> Result<(), ProviderError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| ProviderError::Io {
                path: self.root.clone(),
                source,
            })?;
        *self.logged_in.lock() = true;
        debug!(provider = %self.name, root = %self.root.display(), "logged in");
        Ok(())
    }

    async fn logout(&self) -> Result<(), ProviderError> {
        *self.logged_in.lock() = false;
        debug!(provider = %self.name, "logged out");
        Ok(())
    }

    fn has_private_storage(&self) -> bool {
        true
    }

    fn has_sharing_url(&self) -> bool {
        self.sharing_base_url.is_some()
    }

    fn uploader(&self) -> Option<&dyn FileUploader> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(file_name: &str, is_public: bool) -> UploadRequest {
        UploadRequest {
            map_data: json!({"datasets": []}),
            blob: None,
            file_name: file_name.to_string(),
            is_public,
        }
    }

    #[test]
    fn validate_file_name_rejects_paths() {
        assert!(validate_file_name("map.json").is_ok());
        assert!(validate_file_name("../map.json").is_err());
        assert!(validate_file_name("a/b.json").is_err());
        assert!(validate_file_name("").is_err());
    }

    #[test]
    fn share_url_trims_trailing_slash() {
        let provider =
            LocalFolderProvider::new("local", "/tmp/x").with_sharing_base_url("https://maps.test/");
        assert_eq!(
            provider.share_url("a.json").as_deref(),
            Some("https://maps.test/a.json")
        );
        assert!(provider.has_sharing_url());
    }

    #[tokio::test]
    async fn upload_requires_login() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalFolderProvider::new("local", dir.path());
        let err = provider
            .upload_file(request("map.json", false))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotLoggedIn { .. }));
    }

    #[tokio::test]
    async fn private_upload_writes_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalFolderProvider::new("local", dir.path());
        provider.login().await.unwrap();

        let response = provider
            .upload_file(request("map.json", false))
            .await
            .unwrap();

        let stored = dir.path().join(PRIVATE_DIR).join("map.json");
        assert!(stored.exists());
        assert_eq!(response.url, Some(file_url(&stored)));
        assert_eq!(
            response.folder_link,
            Some(file_url(&dir.path().join(PRIVATE_DIR)))
        );
    }

    #[tokio::test]
    async fn public_upload_uses_share_url_and_writes_blob() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalFolderProvider::new("local", dir.path())
            .with_sharing_base_url("https://maps.test");
        provider.login().await.unwrap();

        let mut req = request("shared.json", true);
        req.blob = Some(vec![1, 2, 3]);
        let response = provider.upload_file(req).await.unwrap();

        assert_eq!(response.url.as_deref(), Some("https://maps.test/shared.json"));
        let blob = std::fs::read(dir.path().join(PUBLIC_DIR).join("shared.json.bin")).unwrap();
        assert_eq!(blob, vec![1, 2, 3]);
    }

    #[test]
    fn file_url_is_absolute_for_relative_paths() {
        let url = file_url(Path::new("exports/private"));
        assert!(url.starts_with("file:///"), "got: {}", url);
        assert!(url.ends_with("exports/private"), "got: {}", url);
    }

    #[tokio::test]
    async fn relative_root_yields_absolute_urls() {
        let dir = tempfile::tempdir_in(".").unwrap();
        let cwd = std::env::current_dir().unwrap();
        let root = dir.path().strip_prefix(&cwd).unwrap_or(dir.path());
        assert!(root.is_relative());
        let provider = LocalFolderProvider::new("local", root);
        provider.login().await.unwrap();

        let response = provider
            .upload_file(request("m.json", false))
            .await
            .unwrap();

        let url = response.url.unwrap();
        let stored = url.strip_prefix("file://").unwrap();
        assert!(Path::new(stored).is_absolute(), "got: {}", url);
        assert!(Path::new(stored).exists());
        let folder = response.folder_link.unwrap();
        assert!(Path::new(folder.strip_prefix("file://").unwrap()).is_absolute());
    }

    #[tokio::test]
    async fn failed_blob_write_leaves_no_map_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalFolderProvider::new("local", dir.path());
        provider.login().await.unwrap();

        // A directory where the blob should go makes the blob write fail.
        let private = dir.path().join(PRIVATE_DIR);
        std::fs::create_dir_all(private.join("m.json.bin")).unwrap();

        let mut req = request("m.json", false);
        req.blob = Some(vec![1]);
        let err = provider.upload_file(req).await.unwrap_err();

        assert!(matches!(err, ProviderError::Io { .. }));
        assert!(!private.join("m.json").exists());
    }

    #[tokio::test]
    async fn failed_map_write_removes_blob() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalFolderProvider::new("local", dir.path());
        provider.login().await.unwrap();

        let private = dir.path().join(PRIVATE_DIR);
        std::fs::create_dir_all(private.join("m.json")).unwrap();

        let mut req = request("m.json", false);
        req.blob = Some(vec![1]);
        let err = provider.upload_file(req).await.unwrap_err();

        assert!(matches!(err, ProviderError::Io { .. }));
        assert!(!private.join("m.json.bin").exists());
    }

    #[tokio::test]
    async fn logout_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalFolderProvider::new("local", dir.path());
        provider.login().await.unwrap();
        assert!(provider.is_logged_in());
        provider.logout().await.unwrap();
        assert!(!provider.is_logged_in());
    }
}
