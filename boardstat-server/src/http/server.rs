//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8008)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8008)),
            cors_permissive: false,
        }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:8008"),
                HeaderValue::from_static("http://127.0.0.1:8008"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::service::router())
        .merge(routes::games::router())
        .merge(routes::board_games::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let state = AppState::new(Arc::new(PgStore::new(pool)));
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state, config.cors_permissive);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::db::{BoardGame, MemoryStore};

    fn app_with(store: Arc<MemoryStore>) -> Router {
        build_router(AppState::new(store), false)
    }

    fn app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (app_with(store.clone()), store)
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn seed_catalog(store: &MemoryStore) {
        for (title, description) in [
            ("Catan", Some("Trade and build on an island")),
            ("Exploding Kittens", None),
            ("Wildcat Rally", Some("Racing cats")),
            ("Azul", None),
        ] {
            store.seed_board_game(BoardGame {
                id: 0,
                title: title.into(),
                title_ru: None,
                short_description: description.map(Into::into),
                logo_url: Some(format!("https://example.com/{}.png", title)),
            });
        }
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8008);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn root_returns_message() {
        let (app, _) = app();
        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (app, _) = app();
        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (app, _) = app();
        let response = post_json(
            &app,
            "/games/",
            json!({
                "name": "Carcassonne",
                "players": "Anna, Boris",
                "scores": "88, 75",
                "date": "01/05/2023",
                "places": "1, 2"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        assert_eq!(created["date"], "2023-05-01");
        let id = created["id"].as_i64().unwrap();

        let response = get(&app, &format!("/games/{}", id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn both_date_formats_store_same_date() {
        let (app, _) = app();
        let iso = post_json(&app, "/games/", json!({"name": "a", "date": "2023-05-01"})).await;
        let dmy = post_json(&app, "/games/", json!({"name": "b", "date": "01/05/2023"})).await;
        assert_eq!(body_json(iso).await["date"], body_json(dmy).await["date"]);
    }

    #[tokio::test]
    async fn two_digit_year_rejected_before_write() {
        let (app, store) = app();
        for date in ["01/05/23", "-2023-05-01"] {
            let response = post_json(&app, "/games/", json!({"name": "Catan", "date": date})).await;
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", date);
        }
        assert_eq!(store.game_count(), 0);
    }

    #[tokio::test]
    async fn empty_date_is_null() {
        let (app, _) = app();
        let response = post_json(&app, "/games/", json!({"name": "Azul", "date": ""})).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert!(created["date"].is_null());

        let response = get(&app, &format!("/games/{}", created["id"])).await;
        assert!(body_json(response).await["date"].is_null());
    }

    #[tokio::test]
    async fn bad_date_rejected_before_write() {
        let (app, store) = app();
        let response = post_json(&app, "/games/", json!({"name": "Catan", "date": "05-2023-01"})).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["field"], "date");
        assert_eq!(store.game_count(), 0);
    }

    #[tokio::test]
    async fn name_is_required() {
        let (app, store) = app();
        let response = post_json(&app, "/games/", json!({"players": "Anna"})).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["field"], "name");

        let response = post_json(&app, "/games/", json!({"name": "x".repeat(256)})).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.game_count(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_422() {
        let (app, _) = app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/games/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": 5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn client_id_is_ignored() {
        let (app, _) = app();
        let response = post_json(&app, "/games/", json!({"id": 99, "name": "Catan"})).await;
        assert_eq!(body_json(response).await["id"], 1);
    }

    #[tokio::test]
    async fn store_failure_is_generic_500() {
        let (app, store) = app();
        store.fail_writes(true);
        let response = post_json(&app, "/games/", json!({"name": "Catan"})).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert!(!body.to_string().contains("simulated"));
        assert_eq!(store.game_count(), 0);
    }

    #[tokio::test]
    async fn missing_game_is_404() {
        let (app, _) = app();
        let response = get(&app, "/games/12345").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn ids_beyond_row_range_are_404() {
        let (app, store) = app();
        seed_catalog(&store);

        let response = get(&app, "/games/99999999999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "game 99999999999 not found");

        let response = get(&app, "/boardgames/3000000000").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");

        let response = get(&app, "/games/-1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_integer_id_is_422() {
        let (app, _) = app();
        let response = get(&app, "/games/abc").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_games_pagination() {
        let (app, _) = app();
        for i in 0..12 {
            post_json(&app, "/games/", json!({"name": format!("game {}", i)})).await;
        }

        let response = get(&app, "/games/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 10);

        let response = get(&app, "/games/?skip=10&limit=10").await;
        let page = body_json(response).await;
        assert_eq!(page.as_array().unwrap().len(), 2);
        assert_eq!(page[0]["id"], 11);

        // without the trailing slash too
        let response = get(&app, "/games?limit=3").await;
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn limit_out_of_range_is_422() {
        let (app, _) = app();
        for uri in ["/games/?limit=101", "/games/?limit=0", "/games/?skip=-1", "/games/?limit=ten"] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        }
    }

    #[tokio::test]
    async fn board_game_search_is_case_insensitive() {
        let (app, store) = app();
        seed_catalog(&store);

        let response = get(&app, "/boardgames/?search=CAT").await;
        assert_eq!(response.status(), StatusCode::OK);
        let found = body_json(response).await;
        let titles: Vec<&str> = found
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Catan", "Wildcat Rally"]);

        // list entries carry only id and title
        assert_eq!(found[0].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn board_game_list_unfiltered_and_paged() {
        let (app, store) = app();
        seed_catalog(&store);

        let response = get(&app, "/boardgames/?search=").await;
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);

        let response = get(&app, "/boardgames/?skip=1&limit=2").await;
        let page = body_json(response).await;
        assert_eq!(page, json!([{"id": 2, "title": "Exploding Kittens"}, {"id": 3, "title": "Wildcat Rally"}]));

        let response = get(&app, "/boardgames/?limit=101").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn board_game_detail() {
        let (app, store) = app();
        seed_catalog(&store);

        let response = get(&app, "/boardgames/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 1, "title": "Catan", "short_description": "Trade and build on an island"})
        );

        let response = get(&app, "/boardgames/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
