//! In-memory store for router tests
//!
//! Mirrors the PostgreSQL semantics the API depends on: ids assigned on
//! insert, id ordering, case-insensitive title search. Writes can be
//! made to fail to exercise the 500 path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::repos::{BoardGame, Game};
use super::store::{DbError, Store};
use crate::models::{NewGame, Page};

/// Mock store for testing
#[derive(Default)]
pub struct MemoryStore {
    games: Mutex<Vec<Game>>,
    board_games: Mutex<Vec<BoardGame>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `create_game` fail with a storage error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Add a catalog entry, assigning the next id. The `id` field of the
    /// argument is ignored.
    pub fn seed_board_game(&self, board_game: BoardGame) -> BoardGame {
        let mut board_games = lock(&self.board_games);
        let seeded = BoardGame {
            id: next_id(board_games.iter().map(|b| b.id)),
            ..board_game
        };
        board_games.push(seeded.clone());
        seeded
    }

    /// Number of stored game sessions.
    pub fn game_count(&self) -> usize {
        lock(&self.games).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

fn window<T>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    items
        .skip(page.skip() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_games(&self, page: Page) -> Result<Vec<Game>, DbError> {
        Ok(window(lock(&self.games).iter().cloned(), page))
    }

    async fn create_game(&self, game: NewGame) -> Result<Game, DbError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::Protocol(
                "simulated write failure".into(),
            )));
        }

        let mut games = lock(&self.games);
        let created = Game {
            id: next_id(games.iter().map(|g| g.id)),
            name: game.name.into_string(),
            players: game.players,
            scores: game.scores,
            date: game.date,
            places: game.places,
        };
        games.push(created.clone());
        Ok(created)
    }

    async fn get_game(&self, id: i32) -> Result<Game, DbError> {
        lock(&self.games)
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("game", id))
    }

    async fn list_board_games(
        &self,
        search: Option<&str>,
        page: Page,
    ) -> Result<Vec<BoardGame>, DbError> {
        let needle = search.map(str::to_lowercase);
        let board_games = lock(&self.board_games);
        let matching = board_games.iter().filter(|b| match &needle {
            Some(needle) => b.title.to_lowercase().contains(needle.as_str()),
            None => true,
        });
        Ok(window(matching.cloned(), page))
    }

    async fn get_board_game(&self, id: i32) -> Result<BoardGame, DbError> {
        lock(&self.board_games)
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("board game", id))
    }
}
