use serde::{Deserialize, Serialize};

/// JWT payload carried by both access and refresh tokens.
///
/// There is no `exp` claim: tokens do not expire and verification checks
/// signature and structure only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32, // subject
    pub jti: String,  // fresh UUID per issuance
}
