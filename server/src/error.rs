use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use serde::Serialize;

use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: &'static str,
    msg: String,
}

impl ErrorBody {
    fn new(msg: impl Into<String>) -> Self {
        Self {
            kind: "error",
            msg: msg.into(),
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0.current_context() {
            KernelError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(errors.fields())).into_response();
            }
            KernelError::RentalConflict(id) => (
                StatusCode::BAD_REQUEST,
                format!("Movie already rented, id: {id}"),
            ),
            KernelError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "invalid credentials".to_string())
            }
            KernelError::InvalidIdentifier => {
                (StatusCode::BAD_REQUEST, "invalid id given".to_string())
            }
            KernelError::NotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
            KernelError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            KernelError::Forbidden => (StatusCode::FORBIDDEN, "forbidden".to_string()),
            KernelError::Concurrency => (StatusCode::CONFLICT, "conflict".to_string()),
            KernelError::Timeout => (StatusCode::REQUEST_TIMEOUT, "timed out".to_string()),
            KernelError::Internal => {
                tracing::error!("{:?}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}
