use crate::errors::ApiError;
use crate::models::leaderboard::{CombinedRow, LeaderboardRow, SplitRow};
use crate::models::player::{Appearance, AppearanceScores, PlayerRecord};
use crate::utils::date::parse_appearance_date;

/// Picks the appearance with the latest date. On equal dates the one stored
/// first wins.
pub fn most_recent_appearance(player: &PlayerRecord) -> Result<&Appearance, ApiError> {
    let mut appearances = player.apparitions.iter();
    let first = appearances
        .next()
        .ok_or_else(|| ApiError::EmptyAppearances {
            id: player.id.clone(),
        })?;
    let first_date = parse_appearance_date(first.date())?;

    let (latest, _) = appearances.try_fold(
        (first, first_date),
        |latest, current| -> Result<_, ApiError> {
            let current_date = parse_appearance_date(current.date())?;
            if current_date > latest.1 {
                Ok((current, current_date))
            } else {
                Ok(latest)
            }
        },
    )?;

    Ok(latest)
}

/// Builds the row from the latest appearance. Only that appearance has to
/// carry a readable score layout.
pub fn extract_leaderboard_row(player: &PlayerRecord) -> Result<LeaderboardRow, ApiError> {
    let latest = most_recent_appearance(player)?;
    let scores = latest
        .scores()
        .map_err(|source| ApiError::MalformedAppearance {
            id: player.id.clone(),
            date: latest.date.clone(),
            source,
        })?;

    let row = match scores {
        AppearanceScores::Combined(scores) => LeaderboardRow::Combined(CombinedRow {
            id: player.id.clone(),
            date: latest.date.clone(),
            pseudo: scores.pseudo,
            score_eff: scores.score_eff,
            score_spd: scores.score_spd,
            total: scores.score_eff + scores.score_spd,
        }),
        AppearanceScores::Split(scores) => LeaderboardRow::Split(SplitRow {
            id: player.id.clone(),
            date: latest.date.clone(),
            pseudo: scores.pseudo,
            score_rta_eff: scores.rta_eff,
            score_siege_eff: scores.siege_eff,
            score_rta_spd: scores.rta_spd,
            score_siege_spd: scores.siege_spd,
            anonyme: scores.anonyme,
            apparitions_count: player.apparitions.len(),
        }),
    };

    Ok(row)
}

/// One row per stored player, in store order. A single bad record fails the
/// whole leaderboard rather than being dropped.
pub fn project_leaderboard(players: &[PlayerRecord]) -> Result<Vec<LeaderboardRow>, ApiError> {
    players.iter().map(extract_leaderboard_row).collect()
}
