use serde::Deserialize;
use serde_json::Value;

/// Top-level Stats API schedule response. Only the day's game list is
/// interesting; everything else in the payload is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleDate {
    #[serde(default, deserialize_with = "one_or_many")]
    pub games: Vec<RawGame>,
}

/// Raw per-game record under `dates[].games[]`. Every field is optional;
/// missing data resolves to defaults during normalization. Numeric leaves
/// that must survive non-numeric garbage are carried as `Value`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    #[serde(default)]
    pub game_pk: Option<Value>,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub teams: Option<GameTeams>,
    #[serde(default)]
    pub linescore: Option<Linescore>,
}

impl RawGame {
    /// Game id, when present and numeric.
    pub fn id(&self) -> Option<i64> {
        match self.game_pk.as_ref() {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn away_abbreviation(&self) -> Option<&str> {
        self.teams.as_ref()?.away.as_ref()?.team.as_ref()?.abbreviation.as_deref()
    }

    pub fn home_abbreviation(&self) -> Option<&str> {
        self.teams.as_ref()?.home.as_ref()?.team.as_ref()?.abbreviation.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    #[serde(default)]
    pub detailed_state: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameTeams {
    #[serde(default)]
    pub away: Option<TeamSide>,
    #[serde(default)]
    pub home: Option<TeamSide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    #[serde(default)]
    pub league_record: Option<LeagueRecord>,
    #[serde(default)]
    pub team: Option<TeamInfo>,
    #[serde(default)]
    pub venue: Option<Venue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueRecord {
    #[serde(default)]
    pub wins: Option<Value>,
    #[serde(default)]
    pub losses: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
}

/// The per-inning scoring sub-structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub current_inning: Option<Value>,
    #[serde(default)]
    pub inning_half: Option<String>,
    #[serde(default)]
    pub outs: Option<Value>,
    #[serde(default)]
    pub teams: Option<LinescoreTeams>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinescoreTeams {
    #[serde(default)]
    pub away: Option<LinescoreSide>,
    #[serde(default)]
    pub home: Option<LinescoreSide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinescoreSide {
    #[serde(default)]
    pub runs: Option<Value>,
}

/// The API returns `games` as a list, except when exactly one game is
/// scheduled, in which case it is a single object. Always yield a list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<RawGame>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<RawGame>),
        One(Box<RawGame>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(games)) => games,
        Some(OneOrMany::One(game)) => vec![*game],
        None => Vec::new(),
    })
}
