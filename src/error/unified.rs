//! Error classification and recovery hints.

/// Broad error category used to pick a recovery hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Server,
    Api,
    Configuration,
    Serialization,
    Resource,
    Export,
    Unknown,
}

/// Suggested recovery action shown to the user after a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    TryAgainLater,
    CheckCredentials,
    CheckConfiguration,
    CheckResourceDirectory,
    CheckOutputDirectory,
    ContactSupport,
}

impl RecoverySuggestion {
    /// Human-readable hint.
    pub fn hint(self) -> &'static str {
        match self {
            Self::TryAgainLater => "the generation service is unavailable, try again later",
            Self::CheckCredentials => "check the API key for the selected backend",
            Self::CheckConfiguration => "check LECTIO_* settings and lectio.toml",
            Self::CheckResourceDirectory => "check that the resource directory is writable",
            Self::CheckOutputDirectory => "check that the output directory is writable",
            Self::ContactSupport => "unexpected failure",
        }
    }
}
