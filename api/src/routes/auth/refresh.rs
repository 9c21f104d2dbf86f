use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::RefreshResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::authorization_header;

/// Handler for `POST /api/refresh`
///
/// Exchanges the refresh token in `Authorization: Bearer <token>` for a
/// new access token. The refresh token itself stays valid.
pub async fn refresh<U, R>(state: web::Data<AppState<U, R>>, req: HttpRequest) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    match state.auth_service.refresh(authorization_header(&req)).await {
        Ok(access) => HttpResponse::Ok().json(RefreshResponse::from(access)),
        Err(e) => handle_domain_error(&e),
    }
}
