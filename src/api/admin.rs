//! Admin reset endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RESET_ALL;
use crate::db::entries;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters for reset
#[derive(Debug, Deserialize)]
pub struct ResetQuery {
    /// Admin key; checked only when one is configured
    pub key: Option<String>,
}

/// Reset response listing the games that were cleared
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub ok: bool,
    pub cleared: Vec<String>,
}

/// POST /admin/reset/:game (or the literal `all`)
///
/// The key check runs before anything else; nothing is deleted on
/// failure. When no admin key is configured the check is skipped and
/// reset is unauthenticated.
pub async fn reset(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Query(query): Query<ResetQuery>,
) -> ApiResult<Json<ResetResponse>> {
    if let Some(expected) = &state.config.admin_key {
        if query.key.as_deref() != Some(expected.as_str()) {
            return Err(ApiError::Unauthorized);
        }
    }

    let cleared = if game == RESET_ALL {
        let db = &state.db;
        let deletes = state.config.games.iter().map(|game| async move {
            let removed = entries::clear_game(db, game).await?;
            Ok::<_, ApiError>((game.clone(), removed))
        });
        try_join_all(deletes).await?
    } else {
        super::require_known_game(&state.config, &game)?;
        let removed = entries::clear_game(&state.db, &game).await?;
        vec![(game, removed)]
    };

    for (game, removed) in &cleared {
        info!("Cleared {} leaderboard ({} entries)", game, removed);
    }

    Ok(Json(ResetResponse {
        ok: true,
        cleared: cleared.into_iter().map(|(game, _)| game).collect(),
    }))
}
