//! Game session endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::Game;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::models::{GameCreateRequest, NewGame, Page, PageParams};
use crate::state::AppState;

/// Game session response
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i32,
    pub name: String,
    pub players: Option<String>,
    pub scores: Option<String>,
    /// ISO-8601 `YYYY-MM-DD`
    pub date: Option<String>,
    pub places: Option<String>,
}

impl From<Game> for GameResponse {
    fn from(g: Game) -> Self {
        Self {
            id: g.id,
            name: g.name,
            players: g.players,
            scores: g.scores,
            date: g.date.map(|d| d.format("%Y-%m-%d").to_string()),
            places: g.places,
        }
    }
}

/// GET /games/ - list recorded game sessions
async fn list_games(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<Vec<GameResponse>>, ApiError> {
    let page = Page::try_from(params)?;
    let games = state.store().list_games(page).await?;
    tracing::info!(count = games.len(), skip = page.skip(), limit = page.limit(), "listed games");

    Ok(Json(games.into_iter().map(GameResponse::from).collect()))
}

/// POST /games/ - record a game session
async fn create_game(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<GameCreateRequest>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    // Validation happens before the store is touched
    let new_game = NewGame::try_from(req)?;
    tracing::debug!(?new_game, "creating game");

    let game = state.store().create_game(new_game).await?;
    tracing::info!(id = game.id, "created game");

    Ok((StatusCode::CREATED, Json(GameResponse::from(game))))
}

/// GET /games/{id} - get a single game session
async fn get_game(
    State(state): State<AppState>,
    id: ValidId,
) -> Result<Json<GameResponse>, ApiError> {
    let id = id.row_id("game")?;
    let game = state.store().get_game(id).await?;
    Ok(Json(GameResponse::from(game)))
}

/// Game routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game))
}
