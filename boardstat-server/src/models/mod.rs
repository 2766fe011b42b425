//! Domain models with validation at construction
//!
//! Everything a client sends is checked here before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod date;
pub mod game;
pub mod pagination;

pub use validation::ValidationError;
pub use date::parse_game_date;
pub use game::{GameCreateRequest, GameName, NewGame};
pub use pagination::{BoardGameQuery, Page, PageParams};
