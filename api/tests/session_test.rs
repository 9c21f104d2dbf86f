//! Integration tests for login, refresh and revoke

mod common;

use actix_web::{
    http::{header, StatusCode},
    test,
};
use chirpy_api::app::create_app;
use chirpy_core::repositories::TokenRepository;
use chirpy_shared::config::Environment;
use serde_json::{json, Value};

use common::{bearer, setup};

#[actix_web::test]
async fn test_login_returns_user_and_tokens() {
    let ctx = setup(Environment::Development);
    let user = ctx.register("saul@bettercall.com", "123456").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "saul@bettercall.com", "password": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], "saul@bettercall.com");
    assert!(body.get("hashed_password").is_none());

    let token = body["token"].as_str().unwrap();
    assert_eq!(ctx.access_tokens.validate(token).unwrap(), user.id);

    let refresh_token = body["refresh_token"].as_str().unwrap();
    assert_eq!(refresh_token.len(), 64);
    assert!(refresh_token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    let stored = ctx.tokens.find_by_token(refresh_token).await.unwrap().unwrap();
    assert_eq!(stored.user_id, user.id);
}

#[actix_web::test]
async fn test_login_honours_shorter_expiry() {
    let ctx = setup(Environment::Development);
    ctx.register("saul@bettercall.com", "123456").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "email": "saul@bettercall.com",
            "password": "123456",
            "expires_in_seconds": 60
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let claims = ctx
        .access_tokens
        .decode_claims(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.exp - claims.iat, 60);
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let ctx = setup(Environment::Development);
    ctx.register("saul@bettercall.com", "123456").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let wrong_password = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "saul@bettercall.com", "password": "654321" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body: Value = test::read_body_json(resp).await;

    let unknown_email = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "kim@wexler.com", "password": "123456" }))
        .to_request();
    let resp = test::call_service(&app, unknown_email).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email_body: Value = test::read_body_json(resp).await;

    assert_eq!(wrong_password_body["error"], unknown_email_body["error"]);
    assert_eq!(wrong_password_body["message"], unknown_email_body["message"]);
    assert!(ctx.tokens.is_empty().await);
}

#[actix_web::test]
async fn test_refresh_issues_new_access_token() {
    let ctx = setup(Environment::Development);
    let session = ctx.login("saul@bettercall.com", "123456").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let first = ctx.access_tokens.decode_claims(&session.access_token).unwrap();

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/refresh")
            .insert_header((header::AUTHORIZATION, bearer(&session.refresh_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap();
        assert_eq!(ctx.access_tokens.validate(token).unwrap(), session.user.id);
        assert!(ctx.access_tokens.decode_claims(token).unwrap().iat >= first.iat);
        assert!(body.get("refresh_token").is_none());
    }
}

#[actix_web::test]
async fn test_refresh_rejects_bad_credentials() {
    let ctx = setup(Environment::Development);
    let session = ctx.login("saul@bettercall.com", "123456").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let missing = test::TestRequest::post().uri("/api/refresh").to_request();
    let resp = test::call_service(&app, missing).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MISSING_AUTHORIZATION");

    let wrong_scheme = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, format!("ApiKey {}", session.refresh_token)))
        .to_request();
    let resp = test::call_service(&app, wrong_scheme).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MALFORMED_AUTHORIZATION");

    let access_as_refresh = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, bearer(&session.access_token)))
        .to_request();
    let resp = test::call_service(&app, access_as_refresh).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REFRESH_TOKEN_NOT_FOUND");
}

#[actix_web::test]
async fn test_revoke_ends_session() {
    let ctx = setup(Environment::Development);
    let session = ctx.login("saul@bettercall.com", "123456").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for _ in 0..2 {
        let revoke = test::TestRequest::post()
            .uri("/api/revoke")
            .insert_header((header::AUTHORIZATION, bearer(&session.refresh_token)))
            .to_request();
        let resp = test::call_service(&app, revoke).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let refresh = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, bearer(&session.refresh_token)))
        .to_request();
    let resp = test::call_service(&app, refresh).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_REVOKED");

    // Access tokens already handed out stay valid until they expire
    assert!(ctx.access_tokens.validate(&session.access_token).is_ok());
}

#[actix_web::test]
async fn test_revoke_unknown_token() {
    let ctx = setup(Environment::Development);
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/revoke")
        .insert_header((header::AUTHORIZATION, bearer(&"ab".repeat(32))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REFRESH_TOKEN_NOT_FOUND");
}
