use crate::error::{auth_error, WfhResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the cached token inside the cache directory
pub const TOKEN_CACHE_FILE: &str = "wfh-calendar.json";

/// OAuth token persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Body returned by the token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
}

impl CachedToken {
    /// Build a token from a token endpoint response received at `now`
    pub fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            refresh_token: response.refresh_token,
            expiry: response.expires_in.map(|secs| now + Duration::seconds(secs)),
        }
    }

    /// A token without an expiry never expires
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= now)
    }
}

/// Location of the cached token on disk
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store inside `dir`, creating the directory owner-only if absent
    pub fn in_dir(dir: &Path) -> WfhResult<Self> {
        create_private_dir(dir)?;

        let file_name: String = url::form_urlencoded::byte_serialize(TOKEN_CACHE_FILE.as_bytes()).collect();
        Ok(Self::new(dir.join(file_name)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached token.
    ///
    /// Returns `None` when the file is missing or cannot be decoded, in which
    /// case the caller falls back to a fresh authorization.
    pub fn load(&self) -> Option<CachedToken> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No cached token at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(token) => Some(token),
            Err(e) => {
                debug!("Ignoring undecodable token cache {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Write the token, replacing whatever was cached before
    pub fn save(&self, token: &CachedToken) -> WfhResult<()> {
        println!("Saving credential file to: {}", self.path.display());

        let json = serde_json::to_string(token)?;
        fs::write(&self.path, json)
            .map_err(|e| auth_error(&format!("Unable to cache oauth token: {}", e)))?;

        info!("Cached token at {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> WfhResult<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> WfhResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
