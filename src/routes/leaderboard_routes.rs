use crate::controllers::leaderboard_controller::get_leaderboard;
use crate::repositories::player_repository::PlayerStore;
use actix_web::web;

pub fn configure_leaderboard_routes<S: PlayerStore>(cfg: &mut web::ServiceConfig) {
    cfg.route("/leaderboard", web::get().to(get_leaderboard::<S>));
}
