pub mod leaderboard_controller;
pub mod player_controller;
