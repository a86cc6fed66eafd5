use crate::repositories::player_repository::PlayerStore;
use crate::routes::leaderboard_routes::configure_leaderboard_routes;
use crate::routes::player_routes::configure_player_routes;
use actix_web::web;

pub fn configure_routes<S: PlayerStore>(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_leaderboard_routes::<S>)
        .configure(configure_player_routes::<S>);
}
