use actix_web::{web, HttpResponse};
use validator::Validate;

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for `POST /api/login`
///
/// Verifies email and password and answers with the user plus a fresh
/// access token and refresh token. Unknown emails and wrong passwords
/// produce the same 401 response.
pub async fn login<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password, request.expires_in_seconds)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(LoginResponse::from(session)),
        Err(e) => handle_domain_error(&e),
    }
}
