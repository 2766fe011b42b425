//! Game session payload validation
//!
//! `GameCreateRequest` is the raw POST body; `NewGame` is what the store
//! is allowed to insert.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{parse_game_date, ValidationError};

/// Maximum length for game names, in characters
const MAX_GAME_NAME_LEN: usize = 255;

/// Validated game name (1-255 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameName(String);

impl GameName {
    /// Create a new game name.
    ///
    /// Length is counted in characters, so Cyrillic titles get the
    /// same 255 limit as ASCII ones.
    ///
    /// # Example
    /// ```
    /// use boardstat_server::models::GameName;
    ///
    /// assert!(GameName::new("Каркассон").is_ok());
    /// assert!(GameName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_GAME_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_GAME_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Create game request, exactly as the client sent it.
///
/// Every field is optional at the JSON level so that a missing `name`
/// is reported as a validation error naming the field. Unknown keys,
/// including a client-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameCreateRequest {
    pub name: Option<String>,
    pub players: Option<String>,
    pub scores: Option<String>,
    pub date: Option<String>,
    pub places: Option<String>,
}

/// A game session that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub name: GameName,
    pub players: Option<String>,
    pub scores: Option<String>,
    pub date: Option<NaiveDate>,
    pub places: Option<String>,
}

impl TryFrom<GameCreateRequest> for NewGame {
    type Error = ValidationError;

    fn try_from(req: GameCreateRequest) -> Result<Self, Self::Error> {
        let name = req
            .name
            .as_deref()
            .ok_or(ValidationError::Missing { field: "name" })
            .and_then(GameName::new)?;
        let date = parse_game_date(req.date.as_deref())?;

        Ok(Self {
            name,
            players: req.players,
            scores: req.scores,
            date,
            places: req.places,
        })
    }
}
