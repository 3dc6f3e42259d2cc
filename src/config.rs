use std::collections::HashMap;
use std::fs;

use serde::Deserialize;
use tracing::warn;

use crate::model::game::GameStatus;
use crate::teams;

pub const LIVE_URL: &str = "https://www.mlb.com/gameday/{id}";
pub const SCOREBOARD_URL: &str = "http://m.mlb.com/scoreboard";
pub const API_URL: &str = "https://statsapi.mlb.com/api/v1/schedule?sportId=1,51&date={date}&gameTypes=E,S,R,A,F,D,L,W&hydrate=team(),linescore(matchup,runners),stats,game(content(media(featured,epg),summary),tickets),seriesStatus(useOverride=true)&useLatestGames=false&language=en&leagueId=103,104,420";

/// Which team identifier `{home_team}` / `{away_team}` render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamFormat {
    Name,
    Abbreviation,
    City,
}

/// Full configuration surface. Every field has a default, so a config file
/// only needs to name the settings it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Abbreviations of followed teams, e.g. `["BOS", "CHC"]`. Their games
    /// are listed first.
    pub favorite_teams: Vec<String>,
    /// When false, only games of followed teams are rendered.
    pub all_games: bool,
    /// Status order for games of teams that are not followed.
    pub display_order: Vec<GameStatus>,
    pub format_no_games: String,
    pub format: String,
    pub status_pregame: String,
    pub status_in_progress: String,
    pub status_final: String,
    pub status_postponed: String,
    pub status_suspended: String,
    /// `{top_bottom}` label for the top half of an inning.
    pub inning_top: String,
    /// `{top_bottom}` label for the bottom half of an inning.
    pub inning_bottom: String,
    /// Marker rendered by `{home_favorite}` / `{away_favorite}`.
    pub favorite: String,
    /// Overrides merged over the built-in team color table.
    pub team_colors: HashMap<String, String>,
    pub team_format: TeamFormat,
    /// Override date in `YYYY-MM-DD` form. Unset means "today" under the
    /// Eastern-time day rule. Exists primarily for troubleshooting.
    pub date: Option<String>,
    /// IANA zone name for displayed times; unset means the system zone.
    pub time_zone: Option<String>,
    pub live_url: String,
    pub scoreboard_url: String,
    pub api_url: String,
    /// Seconds between polls. Zero polls once and exits.
    pub interval: u64,
    /// Emit one JSON object per line instead of plain text.
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            favorite_teams: Vec::new(),
            all_games: true,
            display_order: vec![
                GameStatus::InProgress,
                GameStatus::Suspended,
                GameStatus::Final,
                GameStatus::Pregame,
                GameStatus::Postponed,
            ],
            format_no_games: "MLB: No games".to_string(),
            format: "MLB: [{away_favorite} ]{away_team} [{away_score} ]({away_wins}-{away_losses}) at [{home_favorite} ]{home_team} [{home_score} ]({home_wins}-{home_losses}) {game_status}".to_string(),
            status_pregame: "{start_time:%H:%M %Z}[ ({delay} Delay)]".to_string(),
            status_in_progress: "({top_bottom} {inning}, {outs} Out)[ ({delay} Delay)]".to_string(),
            status_final: "(Final[/{extra_innings}])".to_string(),
            status_postponed: "(PPD: {postponed})".to_string(),
            status_suspended: "(Suspended: {suspended})".to_string(),
            inning_top: "Top".to_string(),
            inning_bottom: "Bot".to_string(),
            favorite: "★".to_string(),
            team_colors: HashMap::new(),
            team_format: TeamFormat::Name,
            date: None,
            time_zone: None,
            live_url: LIVE_URL.to_string(),
            scoreboard_url: SCOREBOARD_URL.to_string(),
            api_url: API_URL.to_string(),
            interval: 300,
            json_output: false,
        }
    }
}

impl Config {
    /// Load from a TOML file. Absent settings keep their defaults.
    pub fn from_toml_file(path: &str) -> Result<Self, String> {
        let body = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
        let config: Config = toml::from_str(&body)
            .map_err(|e| format!("Failed to parse config file {}: {}", path, e))?;
        config.warn_suspect_settings();
        Ok(config)
    }

    /// Merged color lookup: user overrides first, then the built-in table.
    pub fn team_color(&self, abbreviation: &str) -> Option<&str> {
        self.team_colors
            .get(abbreviation)
            .map(String::as_str)
            .or_else(|| teams::default_color(abbreviation))
    }

    /// Log settings that look wrong without rejecting them; a bad value must
    /// never keep the display from starting.
    pub fn warn_suspect_settings(&self) {
        for team in &self.favorite_teams {
            if !teams::is_valid_team(team) {
                warn!(team = %team, "Unknown team abbreviation in favorite_teams");
            }
        }
        if let Some(name) = self.time_zone.as_deref() {
            if name.parse::<chrono_tz::Tz>().is_err() {
                warn!(time_zone = %name, "Unknown time_zone, displayed times fall back to the system zone");
            }
        }
    }
}
