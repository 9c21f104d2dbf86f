use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::authorization_header;

/// Handler for `POST /api/revoke`
///
/// Revokes the refresh token in `Authorization: Bearer <token>`.
/// Revoking an already revoked token succeeds again.
pub async fn revoke<U, R>(state: web::Data<AppState<U, R>>, req: HttpRequest) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    match state
        .auth_service
        .revoke_session(authorization_header(&req))
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => handle_domain_error(&e),
    }
}
