//! Storage seam between the HTTP layer and the database

use async_trait::async_trait;

use super::repos::{BoardGame, Game};
use crate::models::{NewGame, Page};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Operations the API needs from storage.
///
/// Every call is one logical operation: it acquires what it needs and
/// releases it before returning, on success and on error alike.
#[async_trait]
pub trait Store: Send + Sync {
    /// Up to `page.limit()` game sessions after skipping `page.skip()`, by id.
    async fn list_games(&self, page: Page) -> Result<Vec<Game>, DbError>;

    /// Insert a game session and return it with its assigned id.
    async fn create_game(&self, game: NewGame) -> Result<Game, DbError>;

    /// A single game session, or `DbError::NotFound`.
    async fn get_game(&self, id: i32) -> Result<Game, DbError>;

    /// Catalog entries, optionally filtered by a case-insensitive
    /// substring of the title.
    async fn list_board_games(
        &self,
        search: Option<&str>,
        page: Page,
    ) -> Result<Vec<BoardGame>, DbError>;

    /// A single catalog entry, or `DbError::NotFound`.
    async fn get_board_game(&self, id: i32) -> Result<BoardGame, DbError>;
}
