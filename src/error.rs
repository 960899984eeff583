use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No API URL configured. Set JDASH_API_URL env var or add api_url to the config file (run 'jdash init')"
    )]
    MissingApiUrl,

    #[error("Invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Project not specified and no default_project in config")]
    NoProject,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Not logged in. Run 'jdash login' first")]
    NotLoggedIn,

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
