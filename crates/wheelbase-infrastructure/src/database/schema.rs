//! Schema bootstrap
//!
//! Idempotent table/index creation run at startup. The unique index on
//! `users.email` is the backstop for concurrent signups that both pass the
//! service-level existence check.

use sqlx::PgPool;
use tracing::debug;

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email
           ON users (LOWER(email))"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS cars (
            id SERIAL PRIMARY KEY,
            brand TEXT NOT NULL,
            model TEXT NOT NULL,
            fuel_type TEXT NOT NULL,
            price BIGINT NOT NULL,
            owner_id INT NOT NULL REFERENCES users(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_cars_owner ON cars (owner_id)"#)
        .execute(pool)
        .await?;

    debug!("Schema ensured");
    Ok(())
}
