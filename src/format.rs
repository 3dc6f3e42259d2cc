use std::collections::HashMap;

use chrono::{DateTime, Local};
use chrono_tz::Tz;

use crate::config::{Config, TeamFormat};
use crate::model::game::{GameStatus, NormalizedGame, TeamLine};

const DEFAULT_TIME_SPEC: &str = "%H:%M";

/// One placeholder value. Start times keep their zone-aware form so a
/// `{start_time:SPEC}` placeholder can pass SPEC through to strftime.
enum FieldValue {
    Text(String),
    TimeTz(DateTime<Tz>),
    TimeLocal(DateTime<Local>),
}

impl FieldValue {
    fn render(&self, spec: &str) -> String {
        let spec = if spec.is_empty() { DEFAULT_TIME_SPEC } else { spec };
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::TimeTz(time) => time.format(spec).to_string(),
            FieldValue::TimeLocal(time) => time.format(spec).to_string(),
        }
    }

    // Mirrors the truthiness the optional-group rule wants: empty text and
    // bare zero hide a group, a time never does.
    fn truthy(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty() && text != "0",
            _ => true,
        }
    }
}

/// Render one game to its display line: the per-status template first, then
/// the top-level format with `{game_status}` spliced in.
pub fn render_game(game: &NormalizedGame, config: &Config) -> String {
    let mut fields = formatter_fields(game, config);
    let status_template = match game.status {
        GameStatus::Pregame => &config.status_pregame,
        GameStatus::InProgress => &config.status_in_progress,
        GameStatus::Final => &config.status_final,
        GameStatus::Postponed => &config.status_postponed,
        GameStatus::Suspended => &config.status_suspended,
    };
    let game_status = formatp(status_template, &fields);
    fields.insert("game_status", FieldValue::Text(game_status));
    formatp(&config.format, &fields)
}

/// Color for a rendered line: a followed side's color wins, else the home
/// side's, from the merged color table.
pub fn line_color<'a>(game: &NormalizedGame, config: &'a Config) -> Option<&'a str> {
    let followed =
        |line: &TeamLine| config.favorite_teams.iter().any(|f| f == &line.abbreviation);
    let abbreviation = if followed(&game.home) {
        &game.home.abbreviation
    } else if followed(&game.away) {
        &game.away.abbreviation
    } else {
        &game.home.abbreviation
    };
    config.team_color(abbreviation)
}

fn formatter_fields(game: &NormalizedGame, config: &Config) -> HashMap<&'static str, FieldValue> {
    let text = |s: &str| FieldValue::Text(s.to_string());
    let number = |n: i64| FieldValue::Text(n.to_string());
    let marker = |line: &TeamLine| {
        if config.favorite_teams.iter().any(|f| f == &line.abbreviation) {
            FieldValue::Text(config.favorite.clone())
        } else {
            FieldValue::Text(String::new())
        }
    };

    let mut fields: HashMap<&'static str, FieldValue> = HashMap::new();
    fields.insert("id", number(game.id));
    fields.insert("status", text(game.status.as_str()));
    fields.insert("inning", number(game.inning));
    fields.insert("outs", number(game.outs));
    fields.insert("live_url", text(&game.live_url));
    fields.insert("venue", text(&game.venue));
    fields.insert("delay", text(&game.delay));
    fields.insert("postponed", text(&game.postponed));
    fields.insert("suspended", text(&game.suspended));
    fields.insert("extra_innings", text(&game.extra_innings));
    fields.insert("top_bottom", text(&game.top_bottom));
    fields.insert("start_time", localized_start(game, config));

    fields.insert("away_team", text(&team_display(&game.away, config.team_format)));
    fields.insert("away_city", text(&game.away.city));
    fields.insert("away_name", text(&game.away.name));
    fields.insert("away_abbreviation", text(&game.away.abbreviation));
    fields.insert("away_wins", number(game.away.wins));
    fields.insert("away_losses", number(game.away.losses));
    fields.insert("away_score", number(game.away.score));
    fields.insert("away_favorite", marker(&game.away));

    fields.insert("home_team", text(&team_display(&game.home, config.team_format)));
    fields.insert("home_city", text(&game.home.city));
    fields.insert("home_name", text(&game.home.name));
    fields.insert("home_abbreviation", text(&game.home.abbreviation));
    fields.insert("home_wins", number(game.home.wins));
    fields.insert("home_losses", number(game.home.losses));
    fields.insert("home_score", number(game.home.score));
    fields.insert("home_favorite", marker(&game.home));

    fields
}

fn team_display(line: &TeamLine, mode: TeamFormat) -> String {
    match mode {
        TeamFormat::Name => line.name.clone(),
        TeamFormat::Abbreviation => line.abbreviation.clone(),
        TeamFormat::City => line.city.clone(),
    }
}

fn localized_start(game: &NormalizedGame, config: &Config) -> FieldValue {
    match config
        .time_zone
        .as_deref()
        .and_then(|name| name.parse::<Tz>().ok())
    {
        Some(tz) => FieldValue::TimeTz(game.start_time.with_timezone(&tz)),
        None => FieldValue::TimeLocal(game.start_time.with_timezone(&Local)),
    }
}

/// Substitute `{name}` placeholders (`{start_time:SPEC}` passes SPEC to
/// strftime) and drop any `[...]` group whose placeholders all resolved
/// falsy. Groups nest; unknown placeholders render empty.
fn formatp(template: &str, fields: &HashMap<&'static str, FieldValue>) -> String {
    let chars: Vec<char> = template.chars().collect();
    render_section(&chars, 0, fields).0
}

// Returns (rendered text, any placeholder truthy, index past the section).
fn render_section(
    chars: &[char],
    start: usize,
    fields: &HashMap<&'static str, FieldValue>,
) -> (String, bool, usize) {
    let mut out = String::new();
    let mut any_truthy = false;
    let mut i = start;

    while i < chars.len() {
        match chars[i] {
            '[' => {
                let (inner, truthy, next) = render_section(chars, i + 1, fields);
                if truthy {
                    out.push_str(&inner);
                    any_truthy = true;
                }
                i = next;
            }
            ']' => return (out, any_truthy, i + 1),
            '{' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j] != '}' {
                    j += 1;
                }
                let token: String = chars[i + 1..j].iter().collect();
                let (name, spec) = match token.split_once(':') {
                    Some((name, spec)) => (name, spec),
                    None => (token.as_str(), ""),
                };
                if let Some(value) = fields.get(name) {
                    out.push_str(&value.render(spec));
                    any_truthy |= value.truthy();
                }
                i = if j < chars.len() { j + 1 } else { j };
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    (out, any_truthy, i)
}
