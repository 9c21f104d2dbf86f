//! Readiness endpoint

use actix_web::{http::header::ContentType, HttpResponse};

/// Handler for `GET /api/healthz`
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
