use crate::errors::ApiError;
use crate::models::leaderboard::LeaderboardResponse;
use crate::repositories::player_repository::PlayerStore;
use crate::services::leaderboard_service::project_leaderboard;

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn get_leaderboard<S: PlayerStore>(
    store: web::Data<S>,
) -> Result<HttpResponse, ApiError> {
    let players = store.fetch_all().await.inspect_err(ApiError::log)?;
    let leaderboard = project_leaderboard(&players).inspect_err(ApiError::log)?;

    info!(rows = leaderboard.len(), "leaderboard built");

    Ok(HttpResponse::Ok().json(LeaderboardResponse { leaderboard }))
}
