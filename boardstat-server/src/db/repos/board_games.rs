//! Board game catalog repository (read-only)

use sqlx::{FromRow, PgPool};

use crate::db::store::DbError;
use crate::models::Page;

/// Board game record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BoardGame {
    pub id: i32,
    pub title: String,
    pub title_ru: Option<String>,
    pub short_description: Option<String>,
    pub logo_url: Option<String>,
}

/// Board game repository
pub struct BoardGameRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BoardGameRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List catalog entries in id order, optionally filtered by title.
    ///
    /// The search term is matched literally: LIKE wildcards in it are escaped.
    pub async fn list(&self, search: Option<&str>, page: Page) -> Result<Vec<BoardGame>, DbError> {
        let pattern = search.map(|term| format!("%{}%", escape_like(term)));

        let board_games = sqlx::query_as::<_, BoardGame>(
            r#"
            SELECT id, title, title_ru, short_description, logo_url
            FROM boardgames
            WHERE $1::text IS NULL OR title ILIKE $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(self.pool)
        .await?;

        Ok(board_games)
    }

    /// Get a single catalog entry by id.
    pub async fn get(&self, id: i32) -> Result<BoardGame, DbError> {
        sqlx::query_as::<_, BoardGame>(
            r#"
            SELECT id, title, title_ru, short_description, logo_url
            FROM boardgames
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("board game", id))
    }
}

/// Escape `\`, `%` and `_` for use inside a LIKE pattern.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
