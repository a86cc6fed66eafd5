use crate::errors::ApiError;
use crate::models::player::PlayerDetailResponse;
use crate::repositories::player_repository::PlayerStore;
use crate::services::player_service::assemble_player_detail;

use actix_web::{web, HttpResponse};
use tracing::instrument;

#[instrument(skip_all, fields(id = %id))]
pub async fn get_player_detail<S: PlayerStore>(
    store: web::Data<S>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();

    let player = store.fetch_by_id(&id).await.inspect_err(ApiError::log)?;
    let player = assemble_player_detail(&id, player).inspect_err(ApiError::log)?;

    Ok(HttpResponse::Ok().json(PlayerDetailResponse { player }))
}
