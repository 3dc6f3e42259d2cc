use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use mlb_scoreboard::config::Config;
use mlb_scoreboard::model::game::GameStatus;
use mlb_scoreboard::model::schedule::RawGame;
use mlb_scoreboard::normalize::process_game;

fn raw(value: serde_json::Value) -> RawGame {
    serde_json::from_value(value).expect("game fixture should deserialize")
}

#[test]
fn missing_record_wins_resolve_to_zero() {
    let game = raw(json!({
        "gamePk": 1,
        "teams": {
            "away": { "leagueRecord": { "losses": 48 } },
            "home": {}
        }
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.away.wins, 0);
    assert_eq!(normalized.away.losses, 48);
    assert_eq!(normalized.home.wins, 0);
    assert_eq!(normalized.home.score, 0);
}

#[test]
fn numeric_strings_pass_zero_fallback_and_garbage_does_not() {
    let game = raw(json!({
        "gamePk": 2,
        "teams": {
            "away": { "leagueRecord": { "wins": "64", "losses": "a lot" } },
            "home": {}
        }
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.away.wins, 64);
    assert_eq!(normalized.away.losses, 0);
}

#[test]
fn delayed_start_is_pregame_with_delay_reason() {
    let game = raw(json!({
        "gamePk": 3,
        "status": { "detailedState": "Delayed Start", "reason": "Rain" }
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.status, GameStatus::Pregame);
    assert_eq!(normalized.delay, "Rain");
}

#[test]
fn delayed_start_without_reason_reads_unknown() {
    let game = raw(json!({
        "gamePk": 4,
        "status": { "detailedState": "Delayed Start" }
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.status, GameStatus::Pregame);
    assert_eq!(normalized.delay, "Unknown");
}

#[test]
fn in_progress_delay_reads_text_after_colon() {
    let game = raw(json!({
        "gamePk": 5,
        "status": { "detailedState": "Delayed: Rain" }
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.status, GameStatus::InProgress);
    assert_eq!(normalized.delay, "Rain");
}

#[test]
fn suspended_strips_leading_prefix() {
    let game = raw(json!({
        "gamePk": 6,
        "status": { "detailedState": "Suspended: Rain" }
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.status, GameStatus::Suspended);
    assert_eq!(normalized.suspended, "Rain");
}

#[test]
fn postponed_keeps_reason_and_defaults_it() {
    let with_reason = raw(json!({
        "gamePk": 7,
        "status": { "detailedState": "Postponed", "reason": "Wet Grounds" }
    }));
    let normalized = process_game(&with_reason, &Config::default());
    assert_eq!(normalized.status, GameStatus::Postponed);
    assert_eq!(normalized.postponed, "Wet Grounds");

    let without_reason = raw(json!({
        "gamePk": 8,
        "status": { "detailedState": "Postponed" }
    }));
    let normalized = process_game(&without_reason, &Config::default());
    assert_eq!(normalized.postponed, "Unknown Reason");
}

#[test]
fn completed_early_and_game_over_are_final() {
    for state in ["Completed Early: Rain", "Game Over", "Final"] {
        let game = raw(json!({
            "gamePk": 9,
            "status": { "detailedState": state }
        }));
        let normalized = process_game(&game, &Config::default());
        assert_eq!(normalized.status, GameStatus::Final, "state was: {}", state);
    }
}

#[test]
fn unrecognized_status_is_pregame() {
    for state in ["Warmup", "Pre-Game", ""] {
        let game = raw(json!({
            "gamePk": 10,
            "status": { "detailedState": state }
        }));
        let normalized = process_game(&game, &Config::default());
        assert_eq!(normalized.status, GameStatus::Pregame, "state was: {}", state);
    }
}

#[test]
fn extra_innings_only_past_nine() {
    let eleven = raw(json!({
        "gamePk": 11,
        "status": { "detailedState": "Final" },
        "linescore": { "currentInning": 11 }
    }));
    let normalized = process_game(&eleven, &Config::default());
    assert_eq!(normalized.extra_innings, "11");

    let nine = raw(json!({
        "gamePk": 12,
        "status": { "detailedState": "Final" },
        "linescore": { "currentInning": 9 }
    }));
    let normalized = process_game(&nine, &Config::default());
    assert_eq!(normalized.extra_innings, "");

    // In progress games never show it, whatever the inning
    let live = raw(json!({
        "gamePk": 13,
        "status": { "detailedState": "In Progress" },
        "linescore": { "currentInning": 11 }
    }));
    let normalized = process_game(&live, &Config::default());
    assert_eq!(normalized.extra_innings, "");
}

#[test]
fn top_bottom_uses_configured_labels() {
    let mut config = Config::default();
    config.inning_top = "T".to_string();
    config.inning_bottom = "B".to_string();

    let top = raw(json!({ "gamePk": 14, "linescore": { "inningHalf": "Top" } }));
    assert_eq!(process_game(&top, &config).top_bottom, "T");

    let bottom = raw(json!({ "gamePk": 15, "linescore": { "inningHalf": "bottom" } }));
    assert_eq!(process_game(&bottom, &config).top_bottom, "B");

    let missing = raw(json!({ "gamePk": 16 }));
    assert_eq!(process_game(&missing, &config).top_bottom, "");
}

#[test]
fn game_date_parses_as_utc() {
    let game = raw(json!({
        "gamePk": 17,
        "gameDate": "2026-08-04T23:05:00Z"
    }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(
        normalized.start_time,
        Utc.with_ymd_and_hms(2026, 8, 4, 23, 5, 0).unwrap()
    );
}

#[test]
fn bad_game_date_falls_back_to_epoch() {
    // Unparsable and missing values both degrade to the epoch sentinel
    // instead of failing the whole slate
    for value in [json!("08/04/2026 7:05 PM"), json!(null)] {
        let game = raw(json!({ "gamePk": 18, "gameDate": value }));
        let normalized = process_game(&game, &Config::default());
        assert_eq!(normalized.start_time, DateTime::UNIX_EPOCH);
    }
}

#[test]
fn live_url_substitutes_game_id() {
    let game = raw(json!({ "gamePk": 745001 }));
    let normalized = process_game(&game, &Config::default());
    assert_eq!(normalized.live_url, "https://www.mlb.com/gameday/745001");
}
