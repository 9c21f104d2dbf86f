use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chirpy_api::app::{create_app, AppState};
use chirpy_api::config::load_config;
use chirpy_core::services::{
    AccessTokenCodec, AccountService, AccountServiceConfig, AuthService, AuthServiceConfig,
    PasswordService, RefreshTokenStore, TokenServiceConfig,
};
use chirpy_infra::{DatabasePool, PgTokenRepository, PgUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Chirpy API Server");
    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = load_config()?;
    info!(platform = %config.environment, "Configuration loaded");

    let database = DatabasePool::new(&config.database).await?;
    database.run_migrations().await?;
    info!(pool = %database.get_statistics(), "Database ready");

    let user_repository = Arc::new(PgUserRepository::new(database.get_pool().clone()));
    let token_repository = Arc::new(PgTokenRepository::new(database.get_pool().clone()));

    let token_config = TokenServiceConfig::from(&config.auth.jwt);
    let password_service = Arc::new(PasswordService::new(config.auth.password.clone()));
    let access_tokens = Arc::new(AccessTokenCodec::new(&token_config.jwt_secret));
    let refresh_tokens = Arc::new(RefreshTokenStore::new(
        token_repository,
        token_config.refresh_token_ttl(),
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        password_service.clone(),
        access_tokens,
        refresh_tokens,
        AuthServiceConfig::from(&config.auth.jwt),
    ));
    let account_service = Arc::new(AccountService::new(
        user_repository,
        password_service,
        AccountServiceConfig::from(&config.auth.webhook),
    ));

    let app_state = web::Data::new(
        AppState::new(auth_service, account_service, config.environment)
            .with_allowed_origins(config.server.allowed_origins.clone()),
    );

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
