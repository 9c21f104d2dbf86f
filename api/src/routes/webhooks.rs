//! Payment provider webhook endpoint

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use chirpy_core::repositories::{TokenRepository, UserRepository};
use chirpy_core::services::WebhookOutcome;

use crate::app::AppState;
use crate::dto::WebhookRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::authorization_header;

/// Handler for `POST /api/polka/webhooks`
///
/// Requires `Authorization: ApiKey <key>`. Answers 204 both when the user
/// was upgraded and when the event is ignored, so the provider stops
/// retrying either way.
pub async fn polka_webhook<U, R>(
    state: web::Data<AppState<U, R>>,
    req: HttpRequest,
    payload: web::Json<WebhookRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    match state
        .account_service
        .upgrade_from_webhook(
            authorization_header(&req),
            &payload.event,
            payload.data.user_id,
        )
        .await
    {
        Ok(WebhookOutcome::Upgraded) => HttpResponse::NoContent().finish(),
        Ok(WebhookOutcome::Ignored) => {
            info!(event = %payload.event, "Webhook event ignored");
            HttpResponse::NoContent().finish()
        }
        Err(e) => handle_domain_error(&e),
    }
}
