use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Breed record. No timestamps, no soft delete; owns kittens by reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Breed {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Breed {
    pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<Breed>> {
        sqlx::query_as::<_, Breed>(
            r#"
            SELECT id, name, description
            FROM breeds
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// All breeds in ascending id order, deterministic regardless of
    /// insertion order.
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Breed>> {
        sqlx::query_as::<_, Breed>(
            r#"
            SELECT id, name, description
            FROM breeds
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        name: &str,
        description: Option<&str>,
    ) -> sqlx::Result<Breed> {
        sqlx::query_as::<_, Breed>(
            r#"
            INSERT INTO breeds (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(db)
        .await
    }
}
