use crate::models::player::Score;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CombinedRow {
    pub id: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<String>,
    pub score_eff: Score,
    pub score_spd: Score,
    pub total: Score,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitRow {
    pub id: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<String>,
    pub score_rta_eff: Score,
    pub score_siege_eff: Score,
    pub score_rta_spd: Score,
    pub score_siege_spd: Score,
    pub anonyme: u8,
    #[serde(rename = "apparitionsCount")]
    pub apparitions_count: usize,
}

/// Latest-appearance summary of one player, shaped after that appearance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeaderboardRow {
    Combined(CombinedRow),
    Split(SplitRow),
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardRow>,
}
