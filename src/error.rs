use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Everything a request can fail with. All variants are caller mistakes
/// and surface as 400 with a `{"error": <message>}` body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Customer not found!")]
    CustomerNotFound,
    #[error("Customer already exists!")]
    DuplicateCustomer,
    #[error("Insufficient funds!")]
    InsufficientFunds,
    #[error("Date not found!")]
    MissingDate,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
