//! Session DTOs for login, refresh and revoke

use serde::{Deserialize, Serialize};
use validator::Validate;

use chirpy_core::domain::value_objects::session::{LoginSession, RefreshedAccess};

use super::user_dto::UserResponse;

/// Request body for `POST /api/login`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    /// Requested access token lifetime; out-of-range values fall back to
    /// the default
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

/// Response body for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,

    /// Access token for `Authorization: Bearer`
    pub token: String,

    /// Long-lived opaque token for `POST /api/refresh`
    pub refresh_token: String,
}

impl From<LoginSession> for LoginResponse {
    fn from(session: LoginSession) -> Self {
        Self {
            user: UserResponse::from(session.user),
            token: session.access_token,
            refresh_token: session.refresh_token,
        }
    }
}

/// Response body for `POST /api/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
}

impl From<RefreshedAccess> for RefreshResponse {
    fn from(access: RefreshedAccess) -> Self {
        Self {
            token: access.access_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_core::domain::entities::user::User;

    #[test]
    fn test_login_request_ttl_is_optional() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"pw"}"#).unwrap();
        assert_eq!(request.expires_in_seconds, None);

        let request: LoginRequest = serde_json::from_str(
            r#"{"email":"a@b.com","password":"pw","expires_in_seconds":60}"#,
        )
        .unwrap();
        assert_eq!(request.expires_in_seconds, Some(60));
    }

    #[test]
    fn test_login_response_is_flat() {
        let user = User::new("a@b.com".to_string(), "digest".to_string());
        let session = LoginSession {
            user: user.clone(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: 3600,
        };

        let json = serde_json::to_value(LoginResponse::from(session)).unwrap();

        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["token"], "access");
        assert_eq!(json["refresh_token"], "refresh");
        assert!(json.get("hashed_password").is_none());
    }
}
