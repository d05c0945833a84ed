use crate::error::{config_error, WfhResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// OAuth client configuration as downloaded from the Google Cloud console
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSecret {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

/// The file wraps the secret in either an `installed` or a `web` object
#[derive(Debug, Deserialize)]
struct ClientSecretFile {
    installed: Option<ClientSecret>,
    web: Option<ClientSecret>,
}

impl ClientSecret {
    /// Parse the JSON contents of a client secret file
    pub fn from_json(json: &str) -> WfhResult<Self> {
        let file: ClientSecretFile = serde_json::from_str(json).map_err(|e| {
            config_error(&format!("Unable to parse client secret file to config: {}", e))
        })?;

        file.installed
            .or(file.web)
            .ok_or_else(|| config_error("Client secret file has neither an 'installed' nor a 'web' section"))
    }

    /// Read and parse a client secret file
    pub fn read(path: &Path) -> WfhResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            config_error(&format!(
                "Unable to read client secret file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Redirect URI registered for the installed-app flow
    pub fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or("urn:ietf:wg:oauth:2.0:oob")
    }
}
