use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum JumpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("'{path}' appears to be more than one VCS type")]
    AmbiguousVcs { path: PathBuf },

    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("No projects found matching '{pattern}'")]
    NoMatch { pattern: String },

    #[error("No previous selection recorded")]
    NoPrevious,

    #[error("Selection input closed")]
    InputAborted,

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JumpError {
    /// Process exit status for this error.
    ///
    /// Statuses 0 and 1 are reserved for successful runs (committed and
    /// not-committed respectively), so shell wrappers can tell failure
    /// causes apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            JumpError::Config(_) => 2,
            JumpError::AmbiguousVcs { .. } => 3,
            JumpError::InvalidPattern { .. } => 4,
            JumpError::NoMatch { .. } | JumpError::NoPrevious => 5,
            JumpError::InputAborted => 6,
            JumpError::Io { .. } => 7,
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{0}' is not a valid directory")]
    InvalidRoot(PathBuf),

    #[error("'{name}' is not a supported version control system (options are: {supported})")]
    UnsupportedVcs { name: String, supported: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, JumpError>;
