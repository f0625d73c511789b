//! Queries against the `leaderboard_entries` table
//!
//! Ranking order everywhere: score descending, then submission order.
//! `created_at` has one-second resolution, so `id` (monotone under
//! AUTOINCREMENT) breaks same-second ties in submission order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ApiResult;

/// Full stored row, returned for a fresh submission
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub game: String,
    pub name: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// Projection of a row as it appears in a ranked page
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub name: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert one entry and return the stored row (id and timestamp included)
pub async fn insert_entry(
    pool: &SqlitePool,
    game: &str,
    name: &str,
    score: i64,
) -> ApiResult<LeaderboardEntry> {
    let result = sqlx::query("INSERT INTO leaderboard_entries (game, name, score) VALUES (?, ?, ?)")
        .bind(game)
        .bind(name)
        .bind(score)
        .execute(pool)
        .await?;

    let entry = sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT id, game, name, score, created_at FROM leaderboard_entries WHERE id = ?",
    )
    .bind(result.last_insert_rowid())
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

/// One page of a game's leaderboard in ranking order
pub async fn ranked_page(
    pool: &SqlitePool,
    game: &str,
    limit: i64,
    offset: i64,
) -> ApiResult<Vec<RankedEntry>> {
    let entries = sqlx::query_as::<_, RankedEntry>(
        r#"
        SELECT name, score, created_at
        FROM leaderboard_entries
        WHERE game = ?
        ORDER BY score DESC, created_at ASC, id ASC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(game)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Total number of entries stored for `game`
pub async fn count_entries(pool: &SqlitePool, game: &str) -> ApiResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leaderboard_entries WHERE game = ?")
        .bind(game)
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// Delete every entry for `game`, returning the number removed
pub async fn clear_game(pool: &SqlitePool, game: &str) -> ApiResult<u64> {
    let result = sqlx::query("DELETE FROM leaderboard_entries WHERE game = ?")
        .bind(game)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
