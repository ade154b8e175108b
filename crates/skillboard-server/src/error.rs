use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use skillboard_core::BoardError;

/// An error raised at the HTTP boundary with its status already decided,
/// carried through the `anyhow::Error` chain.
#[derive(Debug)]
struct StatusError {
    status: StatusCode,
    message: String,
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StatusError {}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn with_status(status: StatusCode, msg: impl Into<String>) -> Self {
        Self(
            StatusError {
                status,
                message: msg.into(),
            }
            .into(),
        )
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, msg)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CONFLICT, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, msg)
    }

    fn status(&self) -> StatusCode {
        if let Some(e) = self.0.downcast_ref::<StatusError>() {
            return e.status;
        }
        match self.0.downcast_ref::<BoardError>() {
            Some(e) => match e {
                BoardError::NotInitialized => StatusCode::BAD_REQUEST,
                BoardError::ConsultantNotFound(_) | BoardError::SubmissionNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                BoardError::InvalidContact(_)
                | BoardError::UnknownSolutionPlay(_)
                | BoardError::UnknownSolutionArea(_)
                | BoardError::UnknownIndustry(_)
                | BoardError::UnknownRegion(_)
                | BoardError::UnknownHoursRange(_) => StatusCode::BAD_REQUEST,
                BoardError::PlayNotInArea { .. } | BoardError::HoursOutsideRange { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                BoardError::IdentityUnavailable(_)
                | BoardError::Io(_)
                | BoardError::Yaml(_)
                | BoardError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %format!("{:#}", self.0), "request failed");
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
