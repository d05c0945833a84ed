#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;
use wfh::components::google_calendar::client_secret::ClientSecret;
use wfh::components::google_calendar::token::CachedToken;
use wfh::components::google_calendar::AuthorizationPrompt;
use wfh::config::{Config, EventText};
use wfh::error::{auth_error, WfhResult};

/// Prompt that answers with a fixed code and records every call
#[derive(Debug, Clone, Default)]
pub struct MockPrompt {
    code: Option<String>,
    calls: Arc<AtomicUsize>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl MockPrompt {
    /// Prompt answering with `code`
    pub fn answering(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            ..Default::default()
        }
    }

    /// Prompt that fails if it is ever asked
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorizationPrompt for MockPrompt {
    async fn authorization_code(&self, auth_url: &Url) -> WfhResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(auth_url.to_string());
        self.code
            .clone()
            .ok_or_else(|| auth_error("prompt was not expected to be used"))
    }
}

/// Client secret pointing at a mock token endpoint
pub fn test_secret(server_uri: &str) -> ClientSecret {
    ClientSecret {
        client_id: "test-client.apps.googleusercontent.com".to_string(),
        client_secret: "test-secret".to_string(),
        auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
        token_uri: format!("{}/token", server_uri),
        redirect_uris: vec!["http://localhost".to_string()],
    }
}

/// Write a client_secret.json for `secret` into `dir`
pub fn write_secret_file(dir: &Path, secret: &ClientSecret) -> std::path::PathBuf {
    let path = dir.join("client_secret.json");
    let json = serde_json::json!({
        "installed": {
            "client_id": secret.client_id,
            "client_secret": secret.client_secret,
            "auth_uri": secret.auth_uri,
            "token_uri": secret.token_uri,
            "redirect_uris": secret.redirect_uris,
        }
    });
    std::fs::write(&path, json.to_string()).unwrap();
    path
}

/// Token that never expires
pub fn test_token(access_token: &str) -> CachedToken {
    CachedToken {
        access_token: access_token.to_string(),
        token_type: "Bearer".to_string(),
        refresh_token: Some("test-refresh".to_string()),
        expiry: None,
    }
}

/// Config rooted in a scratch directory and talking to `api_base`
pub fn test_config(dir: &Path, api_base: &str, calendar_id: &str) -> Config {
    Config {
        calendar_id: calendar_id.to_string(),
        client_secret_file: dir.join("client_secret.json"),
        token_cache_dir: dir.join("credentials"),
        calendar_api_base: api_base.to_string(),
        open_browser: false,
        event: EventText::default(),
    }
}
