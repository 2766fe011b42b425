//! Database layer - connection pool, schema bootstrap and stores
//!
//! Handlers only see the [`Store`] trait. `PgStore` talks to PostgreSQL
//! through the repositories; `MemoryStore` backs the router tests.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{BoardGame, BoardGameRepo, Game, GameRepo, PgStore};
pub use store::{DbError, Store};
