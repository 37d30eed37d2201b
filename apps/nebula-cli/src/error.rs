//! Application-level errors and their exit codes.

use std::fmt;
use std::process::ExitCode;

use nebula_core::{DomainError, StoreError};

/// Errors a command reports to the user.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Validation(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Admin login required. Run `nebula login` first."),
            AppError::Validation(msg) => write!(f, "Invalid post: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::NotFound(_) => ExitCode::from(4),
            AppError::BadRequest(_) | AppError::Validation(_) => ExitCode::from(2),
            AppError::Unauthorized => ExitCode::from(3),
            AppError::Internal(_) => ExitCode::FAILURE,
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => e.into(),
            StoreError::Corrupt(msg) => {
                tracing::error!("Post slot is corrupt: {}", msg);
                AppError::Internal(
                    "stored posts are unreadable; refusing to overwrite them".to_string(),
                )
            }
            StoreError::Backend(e) => {
                tracing::error!("Storage error: {}", e);
                AppError::Internal("storage error".to_string())
            }
            StoreError::Serialization(msg) => AppError::Internal(msg),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for commands.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_app_errors() {
        let err: AppError = StoreError::Domain(DomainError::NotFound {
            entity_type: "Post",
            id: "x".to_string(),
        })
        .into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Post with id x not found"));

        let err: AppError = StoreError::Corrupt("eof".to_string()).into();
        assert!(matches!(err, AppError::Internal(_)));

        let err: AppError = DomainError::Validation("title is required".to_string()).into();
        assert_eq!(err.to_string(), "Invalid post: title is required");
    }
}
