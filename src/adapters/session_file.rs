use crate::core::{Session, SessionStore};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 會話檔的內容：已登入過的帳號與目前使用中的號碼
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub active_number: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Session>,
}

impl SessionFile {
    fn active(self) -> Result<Option<Session>> {
        let Some(number) = self
            .active_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        else {
            return Ok(None);
        };

        self.accounts
            .into_iter()
            .find(|account| account.number == number)
            .map(Some)
            .ok_or_else(|| DashboardError::SessionError {
                message: format!("active number {} has no saved account", number),
            })
    }
}

/// Session store backed by a JSON file written by the login flow.
///
/// The file is re-read on every call so a login or account switch made by
/// another process shows up on the next page load.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    api_key: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, api_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            api_key: api_key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<Option<SessionFile>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Session file {} not found", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(DashboardError::IoError(e)),
        };

        let file = serde_json::from_str(&content).map_err(|e| DashboardError::SessionError {
            message: format!("cannot parse {}: {}", self.path.display(), e),
        })?;
        Ok(Some(file))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn active_session(&self) -> Result<Option<Session>> {
        match self.read_file().await? {
            Some(file) => file.active(),
            None => Ok(None),
        }
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}
