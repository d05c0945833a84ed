use super::client_secret::ClientSecret;
use super::token::{CachedToken, TokenResponse, TokenStore};
use crate::config::Config;
use crate::error::{auth_error, WfhResult};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use url::Url;

/// Read/write access to Google Calendar
pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

/// Source of the authorization code pasted back by the user
#[async_trait]
pub trait AuthorizationPrompt: Send + Sync {
    /// Show `auth_url` and wait for the code
    async fn authorization_code(&self, auth_url: &Url) -> WfhResult<String>;
}

/// Prompt on the terminal, reading the code from stdin
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompt {
    open_browser: bool,
}

impl ConsolePrompt {
    pub fn new(open_browser: bool) -> Self {
        Self { open_browser }
    }
}

#[async_trait]
impl AuthorizationPrompt for ConsolePrompt {
    async fn authorization_code(&self, auth_url: &Url) -> WfhResult<String> {
        println!(
            "Go to the following link in your browser then type the authorization code: \n{}",
            auth_url
        );

        if self.open_browser {
            if let Err(e) = webbrowser::open(auth_url.as_str()) {
                warn!("Could not open a browser: {}", e);
            }
        }

        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .map_err(|e| auth_error(&format!("Unable to read authorization code {}", e)))?;

        line.split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or_else(|| auth_error("Unable to read authorization code: no input"))
    }
}

/// Resolves a token from the cache or through the interactive flow
pub struct Authenticator<P> {
    secret: ClientSecret,
    store: TokenStore,
    prompt: P,
    http: Client,
}

impl<P: AuthorizationPrompt> Authenticator<P> {
    pub fn new(secret: ClientSecret, store: TokenStore, prompt: P) -> Self {
        Self {
            secret,
            store,
            prompt,
            http: Client::new(),
        }
    }

    /// Use the cached token if there is one, otherwise authorize on the web
    pub async fn authenticate(self) -> WfhResult<AuthenticatedClient> {
        let token = match self.store.load() {
            Some(token) => {
                debug!("Using cached token from {}", self.store.path().display());
                token
            }
            None => {
                let token = self.token_from_web().await?;
                self.store.save(&token)?;
                token
            }
        };

        Ok(AuthenticatedClient::new(self.http, self.secret, token))
    }

    /// Authorization URL for the installed-app flow
    pub fn authorization_url(&self, state: &str) -> WfhResult<Url> {
        let mut url = Url::parse(&self.secret.auth_uri)
            .map_err(|e| auth_error(&format!("Invalid auth_uri in client secret: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("access_type", "offline")
            .append_pair("client_id", &self.secret.client_id)
            .append_pair("redirect_uri", self.secret.redirect_uri())
            .append_pair("response_type", "code")
            .append_pair("scope", CALENDAR_SCOPE)
            .append_pair("state", state);

        Ok(url)
    }

    async fn token_from_web(&self) -> WfhResult<CachedToken> {
        // Generate random state
        let state = uuid::Uuid::new_v4().to_string();
        let auth_url = self.authorization_url(&state)?;

        info!("No usable cached token, starting interactive authorization");
        let code = self.prompt.authorization_code(&auth_url).await?;

        self.exchange_code(&code).await
    }

    /// Exchange an authorization code for a token
    async fn exchange_code(&self, code: &str) -> WfhResult<CachedToken> {
        let params = [
            ("client_id", self.secret.client_id.as_str()),
            ("client_secret", self.secret.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.secret.redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = request_token(&self.http, &self.secret.token_uri, &params)
            .await
            .map_err(|e| auth_error(&format!("Unable to retrieve token from web: {}", e)))?;

        Ok(CachedToken::from_response(response, Utc::now()))
    }
}

/// POST a form to the token endpoint and decode the reply
async fn request_token(
    http: &Client,
    token_uri: &str,
    params: &[(&str, &str)],
) -> Result<TokenResponse, String> {
    let response = http
        .post(token_uri)
        .form(params)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        let status = response.status();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        return Err(format!("HTTP {} - {}", status, error_body));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Failed to parse token response: {}", e))
}

/// HTTP client carrying an OAuth token
pub struct AuthenticatedClient {
    http: Client,
    secret: ClientSecret,
    token: CachedToken,
}

impl AuthenticatedClient {
    pub fn new(http: Client, secret: ClientSecret, token: CachedToken) -> Self {
        Self {
            http,
            secret,
            token,
        }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn token(&self) -> &CachedToken {
        &self.token
    }

    /// Current access token, refreshed in memory first if it has expired
    pub async fn access_token(&mut self) -> WfhResult<String> {
        if self.token.is_expired(Utc::now()) {
            if let Some(refresh_token) = self.token.refresh_token.clone() {
                self.refresh(&refresh_token).await?;
            } else {
                warn!("Cached token has expired and has no refresh token");
            }
        }

        Ok(self.token.access_token.clone())
    }

    async fn refresh(&mut self, refresh_token: &str) -> WfhResult<()> {
        info!("Refreshing expired access token");

        let params = [
            ("client_id", self.secret.client_id.as_str()),
            ("client_secret", self.secret.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];

        let response = request_token(&self.http, &self.secret.token_uri, &params)
            .await
            .map_err(|e| auth_error(&format!("Failed to refresh token: {}", e)))?;

        let mut token = CachedToken::from_response(response, Utc::now());
        // Google omits the refresh token on refresh responses
        if token.refresh_token.is_none() {
            token.refresh_token = Some(refresh_token.to_string());
        }
        self.token = token;

        Ok(())
    }
}

/// Authenticate using the configured client secret and token cache
pub async fn authenticate(config: &Config) -> WfhResult<AuthenticatedClient> {
    let secret = ClientSecret::read(&config.client_secret_file)?;
    let store = TokenStore::in_dir(&config.token_cache_dir)?;
    let prompt = ConsolePrompt::new(config.open_browser);

    Authenticator::new(secret, store, prompt).authenticate().await
}
