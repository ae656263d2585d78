use crate::auth::repo_types::User;
use sqlx::{PgPool, Postgres, Transaction};

impl User {
    /// Insert a new user. The refresh token column is non-null, so the row
    /// starts with an empty token until `attach_refresh_token` runs.
    ///
    /// Username uniqueness is enforced by the `users_username_key`
    /// constraint; callers translate the unique violation.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, refresh_token)
            VALUES ($1, $2, '')
            RETURNING id, username, password_hash, refresh_token,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut **tx)
        .await
    }

    /// Follow-up update after creation, in the same transaction.
    pub async fn attach_refresh_token(
        tx: &mut Transaction<'_, Postgres>,
        id: i32,
        refresh_token: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET refresh_token = $1
            WHERE id = $2
            RETURNING id, username, password_hash, refresh_token,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(refresh_token)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, refresh_token,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Equality match on both columns. `None` covers wrong username and
    /// wrong password alike; callers must not distinguish the two.
    pub async fn find_by_credentials(
        db: &PgPool,
        username: &str,
        password_hash: &str,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, refresh_token,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE username = $1 AND password_hash = $2
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(db)
        .await
    }
}
