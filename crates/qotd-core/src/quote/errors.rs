use crate::errors::QotdError;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Quote file is not configured")]
    MissingQuoteSource,

    #[error("Quote file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to run '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    #[error("'{command}' exited with {status}: {stderr}")]
    NonZeroExit {
        command: String,
        status: String,
        stderr: String,
    },
}

impl QotdError for RefreshError {
    fn error_code(&self) -> &'static str {
        match self {
            RefreshError::MissingQuoteSource => "MISSING_QUOTE_SOURCE",
            RefreshError::FileNotFound { .. } => "QUOTE_FILE_NOT_FOUND",
            RefreshError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
            RefreshError::NonZeroExit { .. } => "PROCESS_NON_ZERO_EXIT",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            RefreshError::MissingQuoteSource | RefreshError::FileNotFound { .. }
        )
    }
}
