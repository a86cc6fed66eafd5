pub mod leaderboard_service;
pub mod player_service;
