use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::config::JwtConfig;
use crate::state::AppState;

/// Holds JWT signing and verification keys with config data.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub algorithm: Algorithm,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig { secret, algorithm } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
        }
    }
}

impl JwtKeys {
    fn sign(&self, user_id: i32) -> anyhow::Result<String> {
        let claims = Claims {
            user_id,
            // regenerated per issuance so same-instant tokens still differ
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(token)
    }

    pub fn sign_access(&self, user_id: i32) -> anyhow::Result<String> {
        self.sign(user_id)
    }

    pub fn sign_refresh(&self, user_id: i32) -> anyhow::Result<String> {
        self.sign(user_id)
    }

    /// Signature/structure check only: user existence is the caller's problem.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        // Tokens carry no exp claim and never expire.
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = data.claims.user_id, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    #[tokio::test]
    async fn sign_and_verify_access_token() {
        let keys = make_keys();
        let token = keys.sign_access(42).expect("sign access");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.user_id, 42);
    }

    #[tokio::test]
    async fn sign_and_verify_refresh_token() {
        let keys = make_keys();
        let token = keys.sign_refresh(7).expect("sign refresh");
        let claims = keys.verify(&token).expect("verify refresh");
        assert_eq!(claims.user_id, 7);
    }

    #[tokio::test]
    async fn each_issuance_gets_a_fresh_jti() {
        let keys = make_keys();
        let a = keys.verify(&keys.sign_access(1).unwrap()).unwrap();
        let b = keys.verify(&keys.sign_access(1).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[tokio::test]
    async fn token_for_one_user_never_verifies_as_another() {
        let keys = make_keys();
        let token = keys.sign_access(1).expect("sign access");
        let claims = keys.verify(&token).expect("verify token");
        assert_ne!(claims.user_id, 2);
    }

    #[tokio::test]
    async fn verify_rejects_tampered_token() {
        let keys = make_keys();
        let token = keys.sign_access(1).expect("sign access");
        let mut tampered = token.clone();
        // Flip a character inside the signature segment.
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });
        assert!(keys.verify(&tampered).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_secret() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"another-secret"),
            decoding: DecodingKey::from_secret(b"another-secret"),
            algorithm: Algorithm::HS256,
        };
        let token = other.sign_access(1).expect("sign access");
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not.a.jwt").is_err());
    }
}
