//! Service-level endpoints: the `/` banner and `/health`

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Banner returned at `/`
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

/// Liveness response; does not touch the database
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "boardstat API is running",
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Stateless routes, usable with any router state
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
}
