use crate::errors::ApiError;
use crate::models::player::{Appearance, PlayerRecord};
use crate::utils::date::parse_appearance_date;

/// Orders appearances oldest first. Equal dates keep their stored order.
pub fn sort_appearances(appearances: Vec<Appearance>) -> Result<Vec<Appearance>, ApiError> {
    let mut dated = appearances
        .into_iter()
        .map(|appearance| parse_appearance_date(appearance.date()).map(|date| (date, appearance)))
        .collect::<Result<Vec<_>, _>>()?;

    dated.sort_by_key(|(date, _)| *date);

    Ok(dated.into_iter().map(|(_, appearance)| appearance).collect())
}

/// Builds the detail view for a looked-up player.
///
/// A single anonymous appearance withholds the whole record. The record is
/// taken by value so sorting never touches whatever copy the store kept.
pub fn assemble_player_detail(
    id: &str,
    player: Option<PlayerRecord>,
) -> Result<PlayerRecord, ApiError> {
    let mut player = player.ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;

    if player.apparitions.iter().any(Appearance::is_anonymous) {
        return Err(ApiError::Unauthorized { id: player.id });
    }

    player.apparitions = sort_appearances(std::mem::take(&mut player.apparitions))?;

    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn player(value: Value) -> PlayerRecord {
        serde_json::from_value(value).unwrap()
    }

    fn split(date: &str, anonyme: u8, rta_eff: i64) -> Value {
        json!({
            "date": date, "rta_eff": rta_eff, "siege_eff": 0,
            "rta_spd": 0, "siege_spd": 0, "anonyme": anonyme
        })
    }

    fn dates(player: &PlayerRecord) -> Vec<&str> {
        player.apparitions.iter().map(Appearance::date).collect()
    }

    #[test]
    fn sorts_history_ascending() {
        let stored = player(json!({
            "id": "p1",
            "apparitions": [split("10-05-2022", 0, 1), split("01-01-2020", 0, 2), split("20-12-2021", 0, 3)]
        }));

        let detail = assemble_player_detail("p1", Some(stored)).unwrap();
        assert_eq!(dates(&detail), vec!["01-01-2020", "20-12-2021", "10-05-2022"]);
    }

    #[test]
    fn equal_dates_keep_stored_order() {
        let stored = player(json!({
            "id": "p1",
            "apparitions": [split("05-05-2022", 0, 1), split("05-05-2021", 0, 2), split("05-05-2022", 0, 3)]
        }));

        let detail = assemble_player_detail("p1", Some(stored)).unwrap();
        let rta: Vec<&Value> = detail
            .apparitions
            .iter()
            .map(|appearance| &appearance.fields["rta_eff"])
            .collect();
        assert_eq!(rta, vec![&json!(2), &json!(1), &json!(3)]);
    }

    #[test]
    fn missing_player_is_not_found() {
        assert!(matches!(
            assemble_player_detail("unknown-id", None),
            Err(ApiError::NotFound { id }) if id == "unknown-id"
        ));
    }

    #[test]
    fn any_anonymous_appearance_withholds_player() {
        for flagged in 0..3 {
            let apparitions: Vec<Value> = (0..3)
                .map(|i| split("01-01-2020", u8::from(i == flagged), i))
                .collect();
            let stored = player(json!({ "id": "p1", "apparitions": apparitions }));

            assert!(matches!(
                assemble_player_detail("p1", Some(stored)),
                Err(ApiError::Unauthorized { .. })
            ));
        }
    }

    #[test]
    fn other_fields_pass_through() {
        let stored = player(json!({
            "id": "p1",
            "guild": "Valhalla",
            "apparitions": [split("02-01-2020", 0, 1), split("01-01-2020", 0, 2)]
        }));

        let detail = assemble_player_detail("p1", Some(stored.clone())).unwrap();
        assert_eq!(detail.id, stored.id);
        assert_eq!(detail.extra, stored.extra);
        assert_eq!(dates(&stored), vec!["02-01-2020", "01-01-2020"]);
    }

    #[test]
    fn malformed_date_fails_detail() {
        let stored = player(json!({ "id": "p1", "apparitions": [split("1st of May", 0, 1)] }));
        assert!(matches!(
            assemble_player_detail("p1", Some(stored)),
            Err(ApiError::MalformedDate { .. })
        ));
    }

    #[test]
    fn anonymous_flag_on_combined_layout_withholds_player() {
        let stored = player(json!({
            "id": "p1",
            "apparitions": [
                { "date": "02-01-2020", "pseudo": "Kyo", "score_eff": 3, "score_spd": 4, "anonyme": 0 },
                { "date": "01-01-2020", "pseudo": "Kyo", "score_eff": 1, "score_spd": 2, "anonyme": 1 },
            ]
        }));

        assert!(matches!(
            assemble_player_detail("p1", Some(stored)),
            Err(ApiError::Unauthorized { id }) if id == "p1"
        ));
    }

    #[test]
    fn irregular_appearances_are_returned_as_stored() {
        let null_pseudo = json!({ "date": "01-01-2020", "pseudo": null, "score_eff": 1, "score_spd": 2 });
        let missing_score = json!({ "date": "02-01-2019", "rta_eff": 1, "siege_eff": 2, "rta_spd": 3, "anonyme": 0 });
        let stored = player(json!({
            "id": "p1",
            "apparitions": [null_pseudo.clone(), missing_score.clone()]
        }));

        let detail = assemble_player_detail("p1", Some(stored)).unwrap();
        assert_eq!(
            serde_json::to_value(&detail.apparitions).unwrap(),
            json!([missing_score, null_pseudo])
        );
    }
}
