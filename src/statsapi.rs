use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::America::New_York;
use tracing::{error, info, info_span, instrument, warn};

use crate::config::Config;
use crate::model::game::NormalizedGame;
use crate::model::schedule::{RawGame, ScheduleResponse};
use crate::normalize;

/// Before this hour of the Eastern-time morning, the previous day's slate is
/// still the one worth showing.
const ROLLOVER_HOUR_EASTERN: u32 = 10;

/// One day's schedule, fetched from the Stats API and indexed for display.
#[derive(Debug)]
pub struct StatsApi {
    // Raw games keyed by id, plus their encounter order in the response
    games: HashMap<i64, RawGame>,
    game_order: Vec<i64>,
    // Map of followed team abbreviation -> game ids played that day
    team_games: HashMap<String, Vec<i64>>,
}

impl StatsApi {
    /// Fetch the schedule for a specific date and index it.
    #[instrument(level = "info", skip(config))]
    pub fn fetch(config: &Config, date: NaiveDate) -> Result<Self, String> {
        let url = config
            .api_url
            .replace("{date}", &date.format("%Y-%m-%d").to_string());
        let response_result = {
            let _span = info_span!("schedule_fetch", url = %url).entered();
            ureq::get(&url).call()
        };
        match response_result {
            Ok(response) => {
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => Self::from_json(&body, config),
                    Err(e) => {
                        error!(error = %e, "Failed to read schedule response body");
                        Err(format!("Failed to read schedule response body: {}", e))
                    }
                }
            }
            Err(e) => {
                error!(error = %e, url = %url, "Schedule request failed");
                Err(format!("Schedule request failed: {}", e))
            }
        }
    }

    /// Build from a raw JSON response body (no network).
    pub fn from_json(body: &str, config: &Config) -> Result<Self, String> {
        match Self::deserialize_schedule(body) {
            Ok(response) => {
                let (games, game_order, team_games) =
                    Self::build_maps(response, &config.favorite_teams);
                info!(
                    game_count = game_order.len(),
                    tracked_teams = team_games.len(),
                    "Indexed schedule"
                );
                Ok(StatsApi { games, game_order, team_games })
            }
            Err(e) => {
                error!(error = %e, "Failed to deserialize schedule response");
                Err(format!("Failed to deserialize schedule response: {}", e))
            }
        }
    }

    /// Build lookup maps in a single pass over the day's game list: raw games
    /// keyed by id, encounter order, and the followed-team game index.
    fn build_maps(
        response: ScheduleResponse,
        favorites: &[String],
    ) -> (HashMap<i64, RawGame>, Vec<i64>, HashMap<String, Vec<i64>>) {
        let mut games: HashMap<i64, RawGame> = HashMap::new();
        let mut game_order: Vec<i64> = Vec::new();
        let mut team_games: HashMap<String, Vec<i64>> = HashMap::new();

        let game_list = response
            .dates
            .into_iter()
            .next()
            .map(|date| date.games)
            .unwrap_or_default();

        for game in game_list {
            // Entries without a usable id are skipped, not fatal.
            let Some(id) = game.id() else { continue };

            let away = game.away_abbreviation().unwrap_or("").to_uppercase();
            let home = game.home_abbreviation().unwrap_or("").to_uppercase();
            if !away.is_empty() && !home.is_empty() {
                for team in [home.as_str(), away.as_str()] {
                    if favorites.iter().any(|favorite| favorite == team) {
                        team_games.entry(team.to_string()).or_default().push(id);
                    }
                }
            }

            game_order.push(id);
            games.insert(id, game);
        }

        (games, game_order, team_games)
    }

    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    fn deserialize_schedule(body: &str) -> Result<ScheduleResponse, serde_json::Error> {
        serde_json::from_str::<ScheduleResponse>(body)
    }

    /// Followed-team game index: abbreviation -> game ids in schedule order,
    /// both games of a doubleheader included.
    pub fn team_games(&self) -> &HashMap<String, Vec<i64>> {
        &self.team_games
    }

    /// Normalize the slate in display order: games of followed teams first
    /// (favorite-list order, doubleheaders in schedule order), then the
    /// remaining games grouped by the configured display order.
    pub fn ordered_games(&self, config: &Config) -> Vec<NormalizedGame> {
        let mut by_id: HashMap<i64, NormalizedGame> = HashMap::new();
        for id in &self.game_order {
            if let Some(game) = self.games.get(id) {
                by_id.insert(*id, normalize::process_game(game, config));
            }
        }

        let mut ordered: Vec<i64> = Vec::new();
        for team in &config.favorite_teams {
            for id in self.team_games.get(team).map(Vec::as_slice).unwrap_or(&[]) {
                if !ordered.contains(id) {
                    ordered.push(*id);
                }
            }
        }

        if config.all_games {
            for status in &config.display_order {
                for id in &self.game_order {
                    if !ordered.contains(id)
                        && by_id.get(id).map(|game| game.status == *status).unwrap_or(false)
                    {
                        ordered.push(*id);
                    }
                }
            }
            // Statuses missing from display_order still render, trailing.
            for id in &self.game_order {
                if !ordered.contains(id) {
                    ordered.push(*id);
                }
            }
        }

        ordered
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect()
    }
}

/// Date whose slate should be shown. An explicit override wins; otherwise
/// the current Eastern-time day, rolling back one day before 10:00 so the
/// previous evening's games stay visible through the morning.
pub fn api_date(config: &Config, now_utc: DateTime<Utc>) -> NaiveDate {
    if let Some(raw) = config.date.as_deref() {
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => return date,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring unparsable date override"),
        }
    }

    let eastern = now_utc.with_timezone(&New_York);
    if eastern.hour() < ROLLOVER_HOUR_EASTERN {
        eastern.date_naive() - Duration::days(1)
    } else {
        eastern.date_naive()
    }
}
