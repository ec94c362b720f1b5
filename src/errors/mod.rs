use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ValidationMissing(String),
    UploadMissing,
    BadRequest(String),
    NotFound(String),
    PersistenceFailure(String),
    Io(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationMissing(msg) => write!(f, "Validation failed: {}", msg),
            AppError::UploadMissing => write!(f, "No file uploaded"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::PersistenceFailure(msg) => write!(f, "{}", msg),
            AppError::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationMissing(_) | AppError::UploadMissing | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PersistenceFailure(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationMissing(msg) => HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() }),
            AppError::UploadMissing => HttpResponse::BadRequest().json(ErrorResponse { error: self.to_string() }),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() }),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse { error: msg.clone() }),
            // Store and disk failures only ever carry a generic message.
            AppError::PersistenceFailure(msg) | AppError::Io(msg) => HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(msg.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn persistence_failure_has_plain_text_body() {
        let response = AppError::PersistenceFailure("Error adding employee".into()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Error adding employee");
    }

    #[actix_web::test]
    async fn upload_missing_is_a_json_bad_request() {
        let response = AppError::UploadMissing.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "No file uploaded");
    }
}
