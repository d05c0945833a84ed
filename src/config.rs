use crate::error::{config_error, WfhResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the target calendar id
pub const CALENDAR_ID_VAR: &str = "PRODUCT_OOO_CALENDAR_ID";

/// Default location of the OAuth client configuration
pub const DEFAULT_CLIENT_SECRET_FILE: &str = "client_secret.json";

/// Default Google Calendar REST endpoint
pub const DEFAULT_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Directory under the home directory where tokens are cached
pub const TOKEN_CACHE_DIR_NAME: &str = ".credentials";

/// Optional file overriding the event text
const EVENT_CONFIG_FILE: &str = "config/wfh.toml";

/// Text placed on the created event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventText {
    pub summary: String,
    pub location: String,
    pub description: String,
}

impl Default for EventText {
    fn default() -> Self {
        Self {
            summary: "WFH".to_string(),
            location: "Home".to_string(),
            description: "Working from home".to_string(),
        }
    }
}

/// Main configuration structure for the tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar ID the event is created in
    pub calendar_id: String,
    /// Path to the OAuth client configuration downloaded from Google
    pub client_secret_file: PathBuf,
    /// Directory holding the cached token
    pub token_cache_dir: PathBuf,
    /// Base URL of the Calendar REST API
    pub calendar_api_base: String,
    /// Try to open the authorization URL in a browser
    pub open_browser: bool,
    /// Summary, location and description of the event
    pub event: EventText,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> WfhResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // An unset calendar id is forwarded as-is
        let calendar_id = env::var(CALENDAR_ID_VAR).unwrap_or_default();

        let client_secret_file = env::var("WFH_CLIENT_SECRET_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CLIENT_SECRET_FILE));

        let token_cache_dir = match env::var("WFH_TOKEN_CACHE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_token_cache_dir()?,
        };

        let calendar_api_base = env::var("WFH_CALENDAR_API_BASE")
            .unwrap_or_else(|_| String::from(DEFAULT_CALENDAR_API_BASE));

        let open_browser = env::var("WFH_OPEN_BROWSER")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let mut event = EventText::default();
        if let Ok(content) = fs::read_to_string(EVENT_CONFIG_FILE) {
            event = toml::from_str::<EventText>(&content)?;
        }

        Ok(Config {
            calendar_id,
            client_secret_file,
            token_cache_dir,
            calendar_api_base,
            open_browser,
            event,
        })
    }
}

/// `$HOME/.credentials`
pub fn default_token_cache_dir() -> WfhResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(TOKEN_CACHE_DIR_NAME))
        .ok_or_else(|| config_error("Unable to determine the home directory"))
}
