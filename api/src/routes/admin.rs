//! Development-only administration endpoint

use actix_web::{web, HttpResponse};
use serde_json::json;

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for `POST /admin/reset`
///
/// Deletes every user, and with them their refresh tokens. Refused with
/// 403 unless the platform is development.
pub async fn reset<U, R>(state: web::Data<AppState<U, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    match state.account_service.reset(state.environment).await {
        Ok(deleted) => HttpResponse::Ok().json(json!({ "deleted_users": deleted })),
        Err(e) => handle_domain_error(&e),
    }
}
