pub mod leaderboard;
pub mod player;
