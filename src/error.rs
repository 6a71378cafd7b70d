use thiserror::Error;

// Exit codes (0 is success, including "cancelled" and "nothing found")
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SOURCE_UNAVAILABLE: i32 = 2;
pub const EXIT_SOURCE_PARSE: i32 = 3;
pub const EXIT_UI: i32 = 4;
pub const EXIT_OPEN: i32 = 5;
pub const EXIT_CONFIG: i32 = 6;

/// Fatal errors for a single invocation. None of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
    /// `gh` is missing, failed, or is not authenticated
    #[error("could not query pull requests with gh: {detail}\nMake sure the GitHub CLI is installed and run `gh auth login`.")]
    SourceUnavailable { detail: String },

    /// `gh` answered, but not with the JSON we asked for
    #[error("failed to parse gh output JSON: {source}\nOutput: {payload}")]
    SourceParse {
        #[source]
        source: serde_json::Error,
        payload: String,
    },

    #[error("failed to start interactive UI: {0}")]
    UiLaunch(#[source] std::io::Error),

    #[error("failed to open browser: {0:#}")]
    Open(anyhow::Error),

    #[error("config error: {0:#}")]
    Config(anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::SourceUnavailable { .. } => EXIT_SOURCE_UNAVAILABLE,
            AppError::SourceParse { .. } => EXIT_SOURCE_PARSE,
            AppError::UiLaunch(_) => EXIT_UI,
            AppError::Open(_) => EXIT_OPEN,
            AppError::Config(_) => EXIT_CONFIG,
        }
    }
}
