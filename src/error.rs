use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Must provide a day you are working from home")]
    #[diagnostic(
        code(wfh::usage),
        help("usage: wfh <sun|mon|tue|wed|thu|fri|sat>")
    )]
    Usage,

    #[error("Your day must be any of 'sun', 'mon', 'tue', 'wed', 'thu', 'fri', or 'sat' (got '{0}')")]
    #[diagnostic(code(wfh::invalid_day))]
    InvalidDay(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(wfh::config),
        help("download the OAuth client file from the Google Cloud console as client_secret.json")
    )]
    Config(String),

    #[error("Authorization error: {0}")]
    #[diagnostic(code(wfh::authorization))]
    Authorization(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(wfh::google_calendar))]
    GoogleCalendar(String),

    #[error(transparent)]
    #[diagnostic(code(wfh::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(wfh::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(wfh::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type WfhResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create authorization errors
pub fn auth_error(message: &str) -> Error {
    Error::Authorization(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
