use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::json;
use std::process::{ExitCode, Termination};

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

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::NotFound(_) | KernelError::InvalidReference(_) => StatusCode::NOT_FOUND,
            KernelError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            KernelError::InvalidDateRange | KernelError::CarUnavailable(_) => {
                StatusCode::BAD_REQUEST
            }
            KernelError::BookingConflict { .. }
            | KernelError::DuplicateVin(_)
            | KernelError::StillReferenced { .. } => StatusCode::CONFLICT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

// Extractor rejections are reported like any other invalid input.
fn rejected(body: String) -> ErrorStatus {
    ErrorStatus(Report::new(KernelError::Validation(body)))
}

impl From<JsonRejection> for ErrorStatus {
    fn from(e: JsonRejection) -> Self {
        rejected(e.body_text())
    }
}

impl From<QueryRejection> for ErrorStatus {
    fn from(e: QueryRejection) -> Self {
        rejected(e.body_text())
    }
}

impl From<PathRejection> for ErrorStatus {
    fn from(e: PathRejection) -> Self {
        rejected(e.body_text())
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let body = json!({ "detail": self.0.current_context().to_string() });
        (status, Json(body)).into_response()
    }
}
