use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String, // unique
    #[serde(skip_serializing)]
    pub password_hash: String, // unsalted sha-256 hex, not exposed in JSON
    #[serde(skip_serializing)]
    pub refresh_token: String, // single long-lived token, assigned at registration
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}
