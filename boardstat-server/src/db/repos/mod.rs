//! PostgreSQL repositories
//!
//! Each repository borrows the pool and checks out a connection per call.
//! Writes run inside a transaction that is rolled back when dropped
//! without commit.

pub mod board_games;
pub mod games;

use async_trait::async_trait;
use sqlx::PgPool;

pub use board_games::{BoardGame, BoardGameRepo};
pub use games::{Game, GameRepo};

use super::store::{DbError, Store};
use crate::models::{NewGame, Page};

/// [`Store`] backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_games(&self, page: Page) -> Result<Vec<Game>, DbError> {
        GameRepo::new(&self.pool).list(page).await
    }

    async fn create_game(&self, game: NewGame) -> Result<Game, DbError> {
        GameRepo::new(&self.pool).create(game).await
    }

    async fn get_game(&self, id: i32) -> Result<Game, DbError> {
        GameRepo::new(&self.pool).get(id).await
    }

    async fn list_board_games(
        &self,
        search: Option<&str>,
        page: Page,
    ) -> Result<Vec<BoardGame>, DbError> {
        BoardGameRepo::new(&self.pool).list(search, page).await
    }

    async fn get_board_game(&self, id: i32) -> Result<BoardGame, DbError> {
        BoardGameRepo::new(&self.pool).get(id).await
    }
}
