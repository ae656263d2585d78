use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Query parameters for token refresh; the token itself is the credential.
#[derive(Debug, Deserialize)]
pub struct RefreshParams {
    pub refresh_token: String,
}

/// Public part of the user returned after registration.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
    pub id: i32,
    pub username: String,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        Self {
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
            id: user.id,
            username: user.username,
        }
    }
}

/// Full profile returned by /user/me, stored hash and refresh token included.
#[derive(Debug, Serialize)]
pub struct MeOut {
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
    pub id: i32,
    pub username: String,
    pub password: String,
    pub refresh_token: String,
}

impl From<User> for MeOut {
    fn from(user: User) -> Self {
        Self {
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
            id: user.id,
            username: user.username,
            password: user.password_hash,
            refresh_token: user.refresh_token,
        }
    }
}

/// Response returned after login or refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub user_id: i32,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Pairs a freshly signed access token with the user's stored refresh
    /// token; the refresh token is never rotated.
    pub fn bearer(user: &User, access_token: String) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            access_token,
            refresh_token: user.refresh_token.clone(),
            token_type: "bearer".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_user() -> User {
        User {
            id: 3,
            username: "whiskers_keeper".into(),
            password_hash: "aa".repeat(32),
            refresh_token: "stored-refresh".into(),
            created_at: datetime!(2024-10-03 12:09:14 UTC),
            updated_at: datetime!(2024-10-03 12:09:14 UTC),
            deleted_at: None,
        }
    }

    #[test]
    fn token_response_is_bearer_with_stored_refresh_token() {
        let response = TokenResponse::bearer(&sample_user(), "fresh-access".into());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["access_token"], "fresh-access");
        assert_eq!(json["refresh_token"], "stored-refresh");
        assert_eq!(json["user_id"], 3);
    }

    #[test]
    fn user_out_omits_credentials() {
        let json = serde_json::to_value(UserOut::from(sample_user())).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("refresh_token").is_none());
        assert_eq!(json["username"], "whiskers_keeper");
    }

    #[test]
    fn me_out_exposes_stored_hash_and_refresh_token() {
        let json = serde_json::to_value(MeOut::from(sample_user())).unwrap();
        assert_eq!(json["password"], "aa".repeat(32));
        assert_eq!(json["refresh_token"], "stored-refresh");
    }
}
