use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use lingvec_common::LingvecError;
use std::fmt;
use tracing::{error, warn};

use crate::types::ErrorResponse;

/// Pipeline error rendered as a JSON response
#[derive(Debug)]
pub struct ApiError(pub LingvecError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<LingvecError> for ApiError {
    fn from(err: LingvecError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.0.to_string(),
            kind: self.0.kind(),
        })
    }
}

/// Malformed or oversized JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError(LingvecError::invalid_input(err.to_string())).into()
}
