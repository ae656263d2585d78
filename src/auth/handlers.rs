use axum::{
    extract::{FromRef, Query, State},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MeOut, RefreshParams, RegisterRequest, TokenResponse, UserOut},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::hash_password,
        repo_types::User,
    },
    error::{is_unique_violation, ApiError},
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/registration", post(register))
        .route("/user/login", post(login))
        .route("/user/me", post(me))
        .route("/user/refresh", post(refresh))
}

fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]{3,64}$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserOut>, ApiError> {
    if !is_valid_username(&payload.username) {
        warn!(username = %payload.username, "invalid username");
        return Err(ApiError::BadRequest("Invalid username".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let mut tx = state.db.begin().await?;

    let user = match User::create(&mut tx, &payload.username, &hash_password(&payload.password)).await
    {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(username = %payload.username, "username already taken");
            return Err(ApiError::Conflict("Username already taken".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let refresh_token = keys.sign_refresh(user.id)?;
    let user = User::attach_refresh_token(&mut tx, user.id, &refresh_token).await?;
    tx.commit().await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(Json(UserOut::from(user)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let password_hash = hash_password(&payload.password);
    // One lookup, one error: wrong username and wrong password are
    // indistinguishable to the caller.
    let user = User::find_by_credentials(&state.db, &payload.username, &password_hash)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login failed");
            ApiError::NotFound("User not found".into())
        })?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(user.id)?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse::bearer(&user, access_token)))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MeOut>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id, "token subject no longer exists");
            ApiError::Unauthorized("User not found".into())
        })?;

    Ok(Json(MeOut::from(user)))
}

#[instrument(skip(state, params))]
pub async fn refresh(
    State(state): State<AppState>,
    Query(params): Query<RefreshParams>,
) -> Result<Json<TokenResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify(&params.refresh_token)
        .map_err(|_| ApiError::Unauthorized("Invalid refresh token".into()))?;

    let user = User::find_by_id(&state.db, claims.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".into()))?;

    let access_token = keys.sign_access(user.id)?;

    info!(user_id = user.id, "access token refreshed");
    Ok(Json(TokenResponse::bearer(&user, access_token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_usernames() {
        assert!(is_valid_username("whiskers_keeper"));
        assert!(is_valid_username("user.01"));
        assert!(is_valid_username("abc"));
    }

    #[test]
    fn rejects_malformed_usernames() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("bad@name"));
        assert!(!is_valid_username(&"x".repeat(65)));
    }
}
