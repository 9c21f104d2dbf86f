//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin so local front ends and tools can call
//! the API. Every other platform only accepts the configured origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use chirpy_shared::config::Environment;
use tracing::info;

const MAX_AGE_SECONDS: usize = 3600;

/// Creates a CORS middleware instance for the given platform
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    if environment.is_development() {
        create_development_cors()
    } else {
        create_production_cors(allowed_origins)
    }
}

fn create_development_cors() -> Cors {
    info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(MAX_AGE_SECONDS)
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    info!(origins = allowed_origins.len(), "Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(MAX_AGE_SECONDS);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS]
}
