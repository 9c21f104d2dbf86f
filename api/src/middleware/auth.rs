//! Access token authentication for protected endpoints.
//!
//! `JwtAuth` resolves the `Authorization: Bearer <access token>` header
//! through the [`Authenticator`] registered in app data and injects an
//! [`AuthContext`] into the request. Handlers take `AuthContext` as an
//! extractor; extraction fails with 401 when the middleware did not run.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use chirpy_core::{
    errors::{AuthScheme, CredentialError, DomainError},
    repositories::{TokenRepository, UserRepository},
    services::AuthService,
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::handlers::{handle_domain_error, ApiError};

/// Authenticated caller injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject of the validated access token
    pub user_id: Uuid,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().copied();
        ready(context.ok_or_else(|| {
            ApiError(
                CredentialError::MissingHeader {
                    scheme: AuthScheme::Bearer,
                }
                .into(),
            )
            .into()
        }))
    }
}

/// Resolves an `Authorization` header to a user id
///
/// Object safe so the middleware does not depend on the repository types
/// behind the authentication service.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, authorization: Option<&str>) -> Result<Uuid, DomainError>;
}

impl<U, R> Authenticator for AuthService<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    fn authenticate(&self, authorization: Option<&str>) -> Result<Uuid, DomainError> {
        AuthService::authenticate(self, authorization)
    }
}

/// Raw `Authorization` header value, if present and readable
pub fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Access token authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Access token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate_request(&req) {
                Ok(user_id) => {
                    req.extensions_mut().insert(AuthContext { user_id });
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    let response = handle_domain_error(&error);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate_request(req: &ServiceRequest) -> Result<Uuid, DomainError> {
    let authenticator = req
        .app_data::<web::Data<Arc<dyn Authenticator>>>()
        .ok_or_else(|| DomainError::Internal {
            message: "authenticator not registered".to_string(),
        })?;

    authenticator.authenticate(authorization_header(req.request()))
}
