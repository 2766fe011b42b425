//! Route handlers organized by resource

pub mod board_games;
pub mod games;
pub mod service;
