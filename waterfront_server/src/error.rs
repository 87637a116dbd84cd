//! HTTP mapping for calculation errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use waterfront_core::CalcError;

/// A rejected calculation. Always answered with 400 Bad Request.
#[derive(Debug)]
pub struct ApiError(pub CalcError);

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub error: CalcError,
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.0.error_code(),
            message: self.0.to_string(),
            error: self.0.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.body())).into_response()
    }
}
