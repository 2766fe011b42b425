//! boardstat-server: HTTP API for board game statistics
//!
//! Records played game sessions and serves a read-only board game
//! catalog, both stored in PostgreSQL.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{DbError, MemoryStore, PgStore, Store};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
