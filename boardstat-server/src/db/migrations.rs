//! Schema bootstrap
//!
//! There is no migration history: both tables are created if absent and
//! otherwise left alone.

use sqlx::PgPool;

/// Create the `games` and `boardgames` tables if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id SERIAL PRIMARY KEY,
            name VARCHAR NOT NULL,
            players VARCHAR,
            scores VARCHAR,
            date DATE,
            places VARCHAR
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS boardgames (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            title_ru VARCHAR(255),
            short_description TEXT,
            logo_url VARCHAR
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
