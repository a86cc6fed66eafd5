use crate::controllers::player_controller::get_player_detail;
use crate::repositories::player_repository::PlayerStore;
use actix_web::web;

pub fn configure_player_routes<S: PlayerStore>(cfg: &mut web::ServiceConfig) {
    cfg.route("/playerDetail/{id}", web::get().to(get_player_detail::<S>));
}
