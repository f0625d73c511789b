//! Leaderboard read and submit endpoints
//!
//! All three routes share the same sanitized paging rules and the same
//! ranking order; per-game pages for the aggregate read are fetched
//! concurrently.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use crate::db::entries::{self, LeaderboardEntry, RankedEntry};
use crate::error::{ApiError, ApiResult};
use crate::pagination::{clamp_page, PageParams, DEFAULT_LIMIT};
use crate::AppState;

/// Display names longer than this are truncated
pub const MAX_NAME_LEN: usize = 24;

/// Display name used when a submission has no usable name
pub const DEFAULT_NAME: &str = "Anonymous";

/// Query parameters for leaderboard reads
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Entries per page (clamped to [1, 20])
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Entries to skip (clamped to >= 0)
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Score submission body
///
/// `score` stays raw JSON because clients send both numbers and numeric
/// strings.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub score: serde_json::Value,
}

/// One game's page of ranked entries
#[derive(Debug, Serialize)]
pub struct LeaderboardPage {
    pub entries: Vec<RankedEntry>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Submission response: the stored entry plus a fresh first page
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub entry: LeaderboardEntry,
    pub entries: Vec<RankedEntry>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// GET /leaderboards/:game
///
/// Returns one paginated page of the game's leaderboard, with the
/// effective limit/offset echoed back.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<LeaderboardPage>> {
    super::require_known_game(&state.config, &game)?;

    let page = load_page(&state.db, &game, clamp_page(query.limit, query.offset)).await?;
    Ok(Json(page))
}

/// GET /leaderboards
///
/// Returns a page for every configured game, keyed by game identifier.
/// The same limit/offset applies to each game; pages are fetched
/// concurrently.
pub async fn get_all_leaderboards(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<BTreeMap<String, LeaderboardPage>>> {
    let params = clamp_page(query.limit, query.offset);

    let db = &state.db;
    let fetches = state.config.games.iter().map(|game| async move {
        let page = load_page(db, game, params).await?;
        Ok::<_, ApiError>((game.clone(), page))
    });

    let pages = try_join_all(fetches).await?;
    Ok(Json(pages.into_iter().collect()))
}

/// POST /leaderboards/:game
///
/// Validates the submission, stores it, and answers 201 with the stored
/// entry plus a fresh first page of the game's leaderboard.
pub async fn submit_score(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Json(body): Json<SubmitRequest>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    super::require_known_game(&state.config, &game)?;

    let score = parse_score(&body.score)
        .ok_or_else(|| ApiError::InvalidScore(body.score.to_string()))?;
    let name = sanitize_name(body.name.as_deref());

    let entry = entries::insert_entry(&state.db, &game, &name, score).await?;
    info!("New {} entry: {} scored {}", game, entry.name, entry.score);

    // The first-page re-read is not transactional with the insert; a
    // racing submission may already appear in it
    let page = load_page(&state.db, &game, clamp_page(DEFAULT_LIMIT, 0)).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            entry,
            entries: page.entries,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }),
    ))
}

/// Count plus one ranked page for `game`
async fn load_page(db: &SqlitePool, game: &str, params: PageParams) -> ApiResult<LeaderboardPage> {
    let total = entries::count_entries(db, game).await?;
    let entries = entries::ranked_page(db, game, params.limit, params.offset).await?;

    Ok(LeaderboardPage {
        entries,
        total,
        limit: params.limit,
        offset: params.offset,
    })
}

/// Coerce a submitted score to a non-negative integer
///
/// Accepts JSON numbers and numeric strings. The fractional part is
/// truncated toward zero, then the result must be finite, non-negative,
/// and representable as i64. Returns None for everything else.
fn parse_score(raw: &serde_json::Value) -> Option<i64> {
    let number = match raw {
        serde_json::Value::Number(n) => {
            // Integer scores skip the float path and keep full i64 range
            if let Some(integer) = n.as_i64() {
                return if integer >= 0 { Some(integer) } else { None };
            }
            n.as_f64()
        }
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    if !number.is_finite() {
        return None;
    }

    let truncated = number.trunc();
    if truncated < 0.0 || truncated >= i64::MAX as f64 {
        return None;
    }

    Some(truncated as i64)
}

/// Trim, default, and truncate a submitted display name
fn sanitize_name(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return DEFAULT_NAME.to_string();
    }

    trimmed.chars().take(MAX_NAME_LEN).collect()
}
