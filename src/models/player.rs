use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Add;

/// A stored score. Integers stay integers so `40 + 35` renders as `75`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Decimal(f64),
}

impl Score {
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Integer(n) => n as f64,
            Score::Decimal(n) => n,
        }
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        match (self, rhs) {
            (Score::Integer(a), Score::Integer(b)) => a
                .checked_add(b)
                .map(Score::Integer)
                .unwrap_or(Score::Decimal(a as f64 + b as f64)),
            (a, b) => Score::Decimal(a.as_f64() + b.as_f64()),
        }
    }
}

/// Scores with a single efficiency and speed value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CombinedScores {
    #[serde(default)]
    pub pseudo: Option<String>,
    pub score_eff: Score,
    pub score_spd: Score,
}

/// Scores split between RTA and siege, plus the anonymity flag.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SplitScores {
    #[serde(default)]
    pub pseudo: Option<String>,
    pub rta_eff: Score,
    pub siege_eff: Score,
    pub rta_spd: Score,
    pub siege_spd: Score,
    #[serde(default)]
    pub anonyme: u8,
}

/// The two stored score layouts. Split is tried first since combined
/// appearances never carry the RTA/siege fields.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AppearanceScores {
    Split(SplitScores),
    Combined(CombinedScores),
}

/// One dated snapshot of a player, kept as stored.
///
/// Only `date` is required. Everything else stays in `fields` and is decoded
/// on demand, so a layout the leaderboard cannot read still shows up in the
/// player's history.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Appearance {
    pub date: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Appearance {
    pub fn date(&self) -> &str {
        &self.date
    }

    /// `anonyme` is honoured whichever score layout the appearance uses.
    pub fn is_anonymous(&self) -> bool {
        match self.fields.get("anonyme") {
            Some(Value::Bool(flag)) => *flag,
            Some(value) => value.as_f64() == Some(1.0),
            None => false,
        }
    }

    pub fn scores(&self) -> Result<AppearanceScores, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub id: String,
    pub apparitions: Vec<Appearance>,
    // Any other stored field, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct PlayerDetailResponse {
    pub player: PlayerRecord,
}
