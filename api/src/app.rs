//! Application state and factory
//!
//! This module holds the shared application state and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use chirpy_core::{
    repositories::{TokenRepository, UserRepository},
    services::{AccountService, AuthService},
};
use chirpy_shared::{config::Environment, error_codes, ErrorResponse};
use tracing_actix_web::TracingLogger;

use crate::handlers::json_error_handler;
use crate::middleware::{create_cors, Authenticator, JwtAuth};
use crate::routes::{admin, auth, health, users, webhooks};

/// Shared state available to every handler
pub struct AppState<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    pub auth_service: Arc<AuthService<U, R>>,
    pub account_service: Arc<AccountService<U>>,
    pub environment: Environment,
    pub allowed_origins: Vec<String>,
}

impl<U, R> AppState<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    pub fn new(
        auth_service: Arc<AuthService<U, R>>,
        account_service: Arc<AccountService<U>>,
        environment: Environment,
    ) -> Self {
        Self {
            auth_service,
            account_service,
            environment,
            allowed_origins: Vec::new(),
        }
    }

    /// Origins accepted by CORS outside development
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, R>(
    app_state: web::Data<AppState<U, R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    let cors = create_cors(app_state.environment, &app_state.allowed_origins);
    let authenticator: Arc<dyn Authenticator> = app_state.auth_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(authenticator))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(cors)
        .wrap(TracingLogger::default())
        .configure(configure_routes::<U, R>)
        .default_service(web::route().to(not_found))
}

/// Register every route of the API
pub fn configure_routes<U, R>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    R: TokenRepository + 'static,
{
    cfg.service(
        web::scope("/api")
            .route("/healthz", web::get().to(health::healthz))
            .service(
                web::resource("/users")
                    .route(web::post().to(users::create_user::<U, R>))
                    .route(
                        web::put()
                            .to(users::update_user::<U, R>)
                            .wrap(JwtAuth::new()),
                    ),
            )
            .route("/login", web::post().to(auth::login::login::<U, R>))
            .route("/refresh", web::post().to(auth::refresh::refresh::<U, R>))
            .route("/revoke", web::post().to(auth::revoke::revoke::<U, R>))
            .route(
                "/polka/webhooks",
                web::post().to(webhooks::polka_webhook::<U, R>),
            ),
    )
    .service(web::scope("/admin").route("/reset", web::post().to(admin::reset::<U, R>)));
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
