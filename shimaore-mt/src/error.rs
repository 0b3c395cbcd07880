/// Error types for the translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Missing or invalid configuration (env vars, endpoint URLs)
    ConfigError(String),
    /// The lexicon dataset is missing, unreadable, or malformed
    DatasetError(String),
    /// Dataset download failed or produced an unusable file
    DownloadError(String),
    /// The statistical language detector could not classify the input
    DetectionError(String),
    /// A translation hop failed (endpoint error, bad response, timeout)
    TranslationError(String),
    /// Transport-level failure reaching a capability endpoint
    NetworkError(String),
    /// An initialization-state transition that is not allowed
    InvalidState(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::DatasetError(msg) => write!(f, "Dataset error: {}", msg),
            MtError::DownloadError(msg) => write!(f, "Download error: {}", msg),
            MtError::DetectionError(msg) => write!(f, "Detection error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
