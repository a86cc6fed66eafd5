pub mod leaderboard_routes;
pub mod player_routes;
