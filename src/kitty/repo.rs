use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use time::OffsetDateTime;

/// Kitten record. Soft delete is terminal: once `deleted_at` is set the row
/// is invisible to every read except the delete-path `find_any` lookup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Kitty {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub age: i32, // full months
    pub description: Option<String>,
    pub breed_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl Kitty {
    /// The breed reference is enforced by the foreign key only; callers
    /// translate the violation.
    pub async fn create(
        db: &PgPool,
        name: &str,
        color: &str,
        age: i32,
        description: Option<&str>,
        breed_id: i32,
    ) -> sqlx::Result<Kitty> {
        sqlx::query_as::<_, Kitty>(
            r#"
            INSERT INTO kittens (name, color, age, description, breed_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, color, age, description, breed_id,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(name)
        .bind(color)
        .bind(age)
        .bind(description)
        .bind(breed_id)
        .fetch_one(db)
        .await
    }

    pub async fn find_active(db: &PgPool, id: i32) -> sqlx::Result<Option<Kitty>> {
        sqlx::query_as::<_, Kitty>(
            r#"
            SELECT id, name, color, age, description, breed_id,
                   created_at, updated_at, deleted_at
            FROM kittens
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Delete-path lookup: fetches regardless of state so the caller can
    /// tell an absent row from an already-deleted one.
    pub async fn find_any(
        tx: &mut Transaction<'_, Postgres>,
        id: i32,
    ) -> sqlx::Result<Option<Kitty>> {
        sqlx::query_as::<_, Kitty>(
            r#"
            SELECT id, name, color, age, description, breed_id,
                   created_at, updated_at, deleted_at
            FROM kittens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Active kittens, optionally filtered by breed. No ORDER BY: the order
    /// is whatever the store returns.
    pub async fn list_active(db: &PgPool, breed_id: Option<i32>) -> sqlx::Result<Vec<Kitty>> {
        match breed_id {
            Some(breed_id) => {
                sqlx::query_as::<_, Kitty>(
                    r#"
                    SELECT id, name, color, age, description, breed_id,
                           created_at, updated_at, deleted_at
                    FROM kittens
                    WHERE deleted_at IS NULL AND breed_id = $1
                    "#,
                )
                .bind(breed_id)
                .fetch_all(db)
                .await
            }
            None => {
                sqlx::query_as::<_, Kitty>(
                    r#"
                    SELECT id, name, color, age, description, breed_id,
                           created_at, updated_at, deleted_at
                    FROM kittens
                    WHERE deleted_at IS NULL
                    "#,
                )
                .fetch_all(db)
                .await
            }
        }
    }

    /// Persist a merged record. `updated_at` is application time here,
    /// unlike the create path's database default.
    pub async fn save(
        db: &PgPool,
        kitty: &Kitty,
        updated_at: OffsetDateTime,
    ) -> sqlx::Result<Kitty> {
        sqlx::query_as::<_, Kitty>(
            r#"
            UPDATE kittens
            SET name = $1, color = $2, age = $3, description = $4,
                breed_id = $5, updated_at = $6
            WHERE id = $7
            RETURNING id, name, color, age, description, breed_id,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&kitty.name)
        .bind(&kitty.color)
        .bind(kitty.age)
        .bind(&kitty.description)
        .bind(kitty.breed_id)
        .bind(updated_at)
        .bind(kitty.id)
        .fetch_one(db)
        .await
    }

    pub async fn mark_deleted(
        tx: &mut Transaction<'_, Postgres>,
        id: i32,
        at: OffsetDateTime,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE kittens
            SET deleted_at = $1, updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(at)
        .bind(id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
