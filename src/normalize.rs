use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use tracing::error;

use crate::config::Config;
use crate::model::game::{GameStatus, NormalizedGame, TeamLine};
use crate::model::schedule::{RawGame, RawStatus, TeamSide};

const GAME_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Flatten one raw schedule entry into its display record. Never fails:
/// absent or malformed source data degrades to the documented defaults.
pub fn process_game(game: &RawGame, config: &Config) -> NormalizedGame {
    let id = game.id().unwrap_or(0);
    let linescore = game.linescore.as_ref();
    let linescore_teams = linescore.and_then(|l| l.teams.as_ref());

    let inning = zero_fallback(linescore.and_then(|l| l.current_inning.as_ref()));
    let outs = zero_fallback(linescore.and_then(|l| l.outs.as_ref()));

    let away_side = game.teams.as_ref().and_then(|t| t.away.as_ref());
    let home_side = game.teams.as_ref().and_then(|t| t.home.as_ref());
    let away = team_line(
        away_side,
        linescore_teams.and_then(|t| t.away.as_ref()).and_then(|s| s.runs.as_ref()),
    );
    let home = team_line(
        home_side,
        linescore_teams.and_then(|t| t.home.as_ref()).and_then(|s| s.runs.as_ref()),
    );
    let venue = home_side
        .and_then(|s| s.venue.as_ref())
        .and_then(|v| v.name.as_deref())
        .unwrap_or("")
        .to_string();

    let classified = classify_status(game.status.as_ref());

    let extra_innings = if classified.status == GameStatus::Final && inning != 9 {
        inning.to_string()
    } else {
        String::new()
    };

    let top_bottom = match linescore
        .and_then(|l| l.inning_half.as_deref())
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "top" => config.inning_top.clone(),
        "bottom" => config.inning_bottom.clone(),
        _ => String::new(),
    };

    NormalizedGame {
        id,
        status: classified.status,
        inning,
        outs,
        live_url: config.live_url.replace("{id}", &id.to_string()),
        venue,
        away,
        home,
        delay: classified.delay,
        postponed: classified.postponed,
        suspended: classified.suspended,
        extra_innings,
        top_bottom,
        start_time: parse_start_time(id, game.game_date.as_deref()),
    }
}

/// Resolve an optional JSON value to an integer. Numbers and numeric strings
/// count; anything else is zero, never a missing value.
pub fn zero_fallback(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

struct ClassifiedStatus {
    status: GameStatus,
    delay: String,
    postponed: String,
    suspended: String,
}

/// Decision table over the raw detailed state, lower-cased with spaces
/// replaced by underscores, first match wins.
fn classify_status(raw: Option<&RawStatus>) -> ClassifiedStatus {
    let detailed = raw.and_then(|s| s.detailed_state.as_deref()).unwrap_or("");
    let reason = raw.and_then(|s| s.reason.as_deref());
    let key = detailed.replace(' ', "_").to_lowercase();

    let mut classified = ClassifiedStatus {
        status: GameStatus::Pregame,
        delay: String::new(),
        postponed: String::new(),
        suspended: String::new(),
    };

    if key == "delayed_start" {
        classified.delay = reason.unwrap_or("Unknown").to_string();
    } else if key.starts_with("delayed") {
        classified.status = GameStatus::InProgress;
        // Text after the first colon of the detailed state; the whole state
        // when there is none.
        classified.delay = detailed
            .splitn(2, ':')
            .last()
            .unwrap_or("")
            .trim()
            .to_string();
    } else if key == "postponed" {
        classified.status = GameStatus::Postponed;
        classified.postponed = reason.unwrap_or("Unknown Reason").to_string();
    } else if key.starts_with("suspended") {
        classified.status = GameStatus::Suspended;
        let state = if detailed.is_empty() { "Suspended" } else { detailed };
        classified.suspended = state.strip_prefix("Suspended: ").unwrap_or(state).to_string();
    } else if key.starts_with("completed_early") || key == "game_over" || key == "final" {
        classified.status = GameStatus::Final;
    } else if key == "in_progress" {
        classified.status = GameStatus::InProgress;
    }

    classified
}

fn team_line(side: Option<&TeamSide>, runs: Option<&Value>) -> TeamLine {
    let team = side.and_then(|s| s.team.as_ref());
    let record = side.and_then(|s| s.league_record.as_ref());
    TeamLine {
        city: text(team.and_then(|t| t.location_name.as_deref())),
        name: text(team.and_then(|t| t.team_name.as_deref())),
        abbreviation: text(team.and_then(|t| t.abbreviation.as_deref())),
        wins: zero_fallback(record.and_then(|r| r.wins.as_ref())),
        losses: zero_fallback(record.and_then(|r| r.losses.as_ref())),
        score: zero_fallback(runs),
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

/// Parse the fixed UTC `gameDate` format. On failure, log the raw value to
/// surface API changes and substitute the epoch so format strings still
/// render; the times will be wrong, but the display stays alive.
fn parse_start_time(game_pk: i64, raw: Option<&str>) -> DateTime<Utc> {
    let raw = raw.unwrap_or("");
    match NaiveDateTime::parse_from_str(raw, GAME_DATE_FORMAT) {
        Ok(naive) => Utc.from_utc_datetime(&naive),
        Err(e) => {
            error!(game_pk, value = %raw, error = %e, "Unexpected gameDate format");
            DateTime::UNIX_EPOCH
        }
    }
}
