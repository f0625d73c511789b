//! Configuration for camcade-scores
//!
//! All settings come from command-line flags with environment fallbacks,
//! are validated once at startup, and are immutable for the life of the
//! process. Handlers see them through `Arc<Config>` in application state.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

/// Game identifiers served when `--games` is not given
pub const DEFAULT_GAMES: &str = "face,fruit,runner,flappy,boxing";

/// Reset path segment meaning "every configured game".
/// Reserved: it can never name a game.
pub const RESET_ALL: &str = "all";

/// Command-line arguments for camcade-scores
#[derive(Parser, Debug)]
#[command(name = "camcade-scores")]
#[command(about = "Leaderboard service for the Camcade webcam mini-games")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "CAMCADE_PORT")]
    pub port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, default_value = "camcade.db", env = "CAMCADE_DB")]
    pub db_path: PathBuf,

    /// Admin key gating the reset endpoint (empty leaves reset unauthenticated)
    #[arg(long, default_value = "", env = "CAMCADE_ADMIN_KEY")]
    pub admin_key: String,

    /// Comma-separated allowed game identifiers
    #[arg(long, default_value = DEFAULT_GAMES, env = "CAMCADE_GAMES")]
    pub games: String,
}

/// Validated, immutable service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    /// `None` disables the admin-key check on reset
    pub admin_key: Option<String>,
    /// Allowed game identifiers, in configured order
    pub games: Vec<String>,
}

impl Config {
    /// Validate raw arguments into a `Config`
    ///
    /// An empty or whitespace-only admin key becomes `None` (reset runs
    /// without authentication). The game list must be non-empty, free of
    /// blanks and duplicates, and must not contain the reserved `all`.
    pub fn from_args(args: Args) -> Result<Self> {
        let admin_key = match args.admin_key.trim() {
            "" => None,
            key => Some(key.to_string()),
        };

        let games = parse_games(&args.games)?;

        Ok(Config {
            port: args.port,
            db_path: args.db_path,
            admin_key,
            games,
        })
    }

    /// True when `game` is one of the configured identifiers
    pub fn is_known_game(&self, game: &str) -> bool {
        self.games.iter().any(|g| g == game)
    }
}

/// Parse and validate a comma-separated game list
fn parse_games(list: &str) -> Result<Vec<String>> {
    if list.trim().is_empty() {
        bail!("At least one game identifier is required");
    }

    let mut games: Vec<String> = Vec::new();
    for raw in list.split(',') {
        let game = raw.trim();
        if game.is_empty() {
            bail!("Game list {:?} contains a blank identifier", list);
        }
        if game == RESET_ALL {
            bail!("{:?} is reserved for the reset endpoint and cannot name a game", RESET_ALL);
        }
        if games.iter().any(|g| g == game) {
            bail!("Duplicate game identifier: {:?}", game);
        }
        games.push(game.to_string());
    }

    Ok(games)
}
