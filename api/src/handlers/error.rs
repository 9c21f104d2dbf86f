//! Translation of domain errors into HTTP responses

use std::fmt;

use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use chirpy_core::errors::{AuthError, DomainError, PasswordError, TokenError};
use chirpy_shared::{error_codes, ErrorResponse};
use tracing::{error, warn};
use validator::ValidationErrors;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Storage { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Auth(err) => match err {
            AuthError::UserNotFound | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        },
        DomainError::Token(err) => match err {
            TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        },
        DomainError::Password(err) => match err {
            PasswordError::EmptyInput => StatusCode::BAD_REQUEST,
            PasswordError::CredentialMismatch => StatusCode::UNAUTHORIZED,
            PasswordError::MalformedDigest | PasswordError::HashingFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
        DomainError::Credential(_) => StatusCode::UNAUTHORIZED,
    }
}

/// Build the error response for a failed domain operation
///
/// Client errors are logged at warn level and server faults at error
/// level. Server faults never leak their internal message to the caller.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    if status.is_server_error() {
        error!(status = status.as_u16(), error = %error, "Request failed");
    } else {
        warn!(status = status.as_u16(), error = %error, "Request rejected");
    }

    let body = match error {
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::NotFound { resource } => ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("Resource not found: {}", resource),
        ),
        DomainError::Storage { .. } => {
            ErrorResponse::new(error_codes::DATABASE_ERROR, "A storage error occurred")
        }
        DomainError::Internal { .. } => {
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
        DomainError::Auth(err) => ErrorResponse::from(err.clone()),
        DomainError::Token(err) => ErrorResponse::from(err.clone()),
        DomainError::Password(err) => ErrorResponse::from(err.clone()),
        DomainError::Credential(err) => ErrorResponse::from(err.clone()),
    };

    HttpResponse::build(status).json(body)
}

/// Build a 400 response from request body validation failures
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    warn!(fields = ?fields, "Request body failed validation");

    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body")
        .add_detail("fields", fields);
    HttpResponse::BadRequest().json(body)
}

/// JSON extractor error handler answering with the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "Malformed JSON body");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        format!("Invalid JSON body: {}", err),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Domain error carried through actix as an `actix_web::Error`
///
/// Used where a handler cannot return a response directly, such as the
/// authentication middleware and extractors.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}
