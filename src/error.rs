use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Unknown activity code: {0}")]
    UnknownActivityCode(String),
    #[error("Wrong number of values for {code}: expected {expected}, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
    #[error("Division by zero: {what} is zero")]
    DivisionByZero { what: &'static str },
    #[error("Non-finite result for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
    #[error("Calorie computation is not implemented for {training_type}")]
    Unimplemented { training_type: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Calc(CalcError::Unimplemented { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Calc(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
