//! Account registration and credential update endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use chirpy_core::repositories::{TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{UserCredentialsRequest, UserResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

/// Handler for `POST /api/users`
///
/// Registers a new account and answers 201 with the public user view.
pub async fn create_user<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<UserCredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .account_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for `PUT /api/users`
///
/// Replaces the email and password of the caller identified by the
/// access token.
pub async fn update_user<U, R>(
    state: web::Data<AppState<U, R>>,
    auth: AuthContext,
    request: web::Json<UserCredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .account_service
        .update_credentials(auth.user_id, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => handle_domain_error(&e),
    }
}
