use std::{env, thread, time::Duration};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mlb_scoreboard::config::Config;
use mlb_scoreboard::format;
use mlb_scoreboard::statsapi::{self, StatsApi};

fn main() {
    // Structured logging on stderr; stdout belongs to the display.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let config = match env::var("MLB_SCOREBOARD_CONFIG") {
        Ok(path) => match Config::from_toml_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Falling back to default configuration");
                Config::default()
            }
        },
        Err(_) => Config::default(),
    };

    loop {
        run_tick(&config);
        if config.interval == 0 {
            break;
        }
        thread::sleep(Duration::from_secs(config.interval));
    }
}

/// One poll: fetch the day's slate, render it, print one line per game.
/// A failed fetch is logged and the display waits for the next tick.
fn run_tick(config: &Config) {
    let date = statsapi::api_date(config, chrono::Utc::now());
    match StatsApi::fetch(config, date) {
        Ok(schedule) => {
            let games = schedule.ordered_games(config);
            if games.is_empty() {
                emit(config, &config.format_no_games, None, &config.scoreboard_url);
            } else {
                info!(games = games.len(), date = %date, "Rendering slate");
                for game in &games {
                    let line = format::render_game(game, config);
                    emit(config, &line, format::line_color(game, config), &game.live_url);
                }
            }
        }
        Err(e) => error!(error = %e, "Skipping tick after fetch failure"),
    }
}

fn emit(config: &Config, text: &str, color: Option<&str>, url: &str) {
    if config.json_output {
        let payload = serde_json::json!({
            "full_text": text,
            "color": color,
            "url": url,
        });
        println!("{}", payload);
    } else {
        println!("{}", text);
    }
}
