pub mod player_repository;
