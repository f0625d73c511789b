//! HTTP API handlers for camcade-scores

pub mod admin;
pub mod buildinfo;
pub mod health;
pub mod leaderboards;

pub use admin::reset;
pub use buildinfo::build_info;
pub use health::health_check;
pub use leaderboards::{get_all_leaderboards, get_leaderboard, submit_score};

use crate::config::Config;
use crate::error::ApiError;

/// Reject game identifiers outside the configured set before touching storage
pub(crate) fn require_known_game(config: &Config, game: &str) -> Result<(), ApiError> {
    if config.is_known_game(game) {
        Ok(())
    } else {
        Err(ApiError::UnknownGame(game.to_string()))
    }
}
