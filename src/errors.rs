use axum::http::StatusCode;
use thiserror::Error;

/// Text shown to the user whenever a numeric input is rejected.
pub const INVALID_INPUT_NOTICE: &str = "Please enter a valid positive number.";

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{}", INVALID_INPUT_NOTICE)]
    InvalidInput,

    #[error("unknown site: {0}")]
    UnknownSite(String),

    #[error("unknown progress kind: {0}")]
    UnknownKind(String),

    #[error("daily goals for {0} have not been generated yet")]
    GoalsNotLoaded(String),

    #[error("stored value under {key} is malformed: {reason}")]
    Parse { key: String, reason: String },

    #[error("failed to draw random goal")]
    Entropy,
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::InvalidInput => Self::bad_request(err.to_string()),
            TrackerError::UnknownSite(_) | TrackerError::UnknownKind(_) => {
                Self::not_found(err.to_string())
            }
            TrackerError::GoalsNotLoaded(_) => Self::conflict(err.to_string()),
            TrackerError::Parse { .. } | TrackerError::Entropy => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_errors_map_to_status_codes() {
        assert_eq!(
            AppError::from(TrackerError::InvalidInput).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(TrackerError::UnknownSite("nope".into())).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(TrackerError::GoalsNotLoaded("unu".into())).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(TrackerError::Entropy).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_input_carries_notice() {
        let err = AppError::from(TrackerError::InvalidInput);
        assert_eq!(err.message, INVALID_INPUT_NOTICE);
    }
}
