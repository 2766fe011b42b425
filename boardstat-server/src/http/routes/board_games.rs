//! Board game catalog endpoints (read-only)

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::BoardGame;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidQuery};
use crate::models::BoardGameQuery;
use crate::state::AppState;

/// Catalog list entry
#[derive(Debug, Serialize)]
pub struct BoardGameSummary {
    pub id: i32,
    pub title: String,
}

impl From<BoardGame> for BoardGameSummary {
    fn from(b: BoardGame) -> Self {
        Self {
            id: b.id,
            title: b.title,
        }
    }
}

/// Catalog detail response
#[derive(Debug, Serialize)]
pub struct BoardGameDetail {
    pub id: i32,
    pub title: String,
    pub short_description: Option<String>,
}

impl From<BoardGame> for BoardGameDetail {
    fn from(b: BoardGame) -> Self {
        Self {
            id: b.id,
            title: b.title,
            short_description: b.short_description,
        }
    }
}

/// GET /boardgames/ - list catalog entries, optionally searching titles
async fn list_board_games(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<BoardGameQuery>,
) -> Result<Json<Vec<BoardGameSummary>>, ApiError> {
    let page = query.page()?;
    let search = query.search();
    let board_games = state.store().list_board_games(search, page).await?;
    tracing::info!(count = board_games.len(), search, "listed board games");

    Ok(Json(
        board_games.into_iter().map(BoardGameSummary::from).collect(),
    ))
}

/// GET /boardgames/{id} - get a single catalog entry
async fn get_board_game(
    State(state): State<AppState>,
    id: ValidId,
) -> Result<Json<BoardGameDetail>, ApiError> {
    let id = id.row_id("board game")?;
    let board_game = state.store().get_board_game(id).await?;
    Ok(Json(BoardGameDetail::from(board_game)))
}

/// Board game routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/boardgames", get(list_board_games))
        .route("/boardgames/", get(list_board_games))
        .route("/boardgames/{id}", get(get_board_game))
}
