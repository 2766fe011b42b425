//! Game session repository
//!
//! - create: single INSERT ... RETURNING inside a transaction
//! - list: offset/limit ordered by id

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::db::store::DbError;
use crate::models::{NewGame, Page};

/// Game session record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub players: Option<String>,
    pub scores: Option<String>,
    pub date: Option<NaiveDate>,
    pub places: Option<String>,
}

/// Game session repository
pub struct GameRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> GameRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List game sessions in id order.
    pub async fn list(&self, page: Page) -> Result<Vec<Game>, DbError> {
        let games = sqlx::query_as::<_, Game>(
            r#"
            SELECT id, name, players, scores, date, places
            FROM games
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(self.pool)
        .await?;

        Ok(games)
    }

    /// Insert a game session, returning the stored row.
    ///
    /// Any failure before commit drops the transaction, which rolls it back.
    pub async fn create(&self, game: NewGame) -> Result<Game, DbError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Game>(
            r#"
            INSERT INTO games (name, players, scores, date, places)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, players, scores, date, places
            "#,
        )
        .bind(game.name.as_str())
        .bind(game.players.as_deref())
        .bind(game.scores.as_deref())
        .bind(game.date)
        .bind(game.places.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Get a single game session by id.
    pub async fn get(&self, id: i32) -> Result<Game, DbError> {
        sqlx::query_as::<_, Game>(
            r#"
            SELECT id, name, players, scores, date, places
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("game", id))
    }
}
