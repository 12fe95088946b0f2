//! Render command outcomes for stdout.

use appmix_core::{Outcome, SessionLevel, VolumeLevel};
use serde::Serialize;

#[derive(Serialize)]
struct LevelReport<'a> {
    process: &'a str,
    level: VolumeLevel,
}

#[derive(Serialize)]
struct SessionsReport<'a> {
    process: &'a str,
    sessions: &'a [SessionLevel],
}

pub fn render(process: &str, outcome: &Outcome, json: bool) -> serde_json::Result<String> {
    if json {
        return match outcome {
            Outcome::Level(level) => serde_json::to_string(&LevelReport {
                process,
                level: *level,
            }),
            Outcome::Sessions(sessions) => {
                serde_json::to_string(&SessionsReport { process, sessions })
            }
        };
    }
    Ok(match outcome {
        Outcome::Level(level) => level.to_string(),
        Outcome::Sessions(sessions) => sessions
            .iter()
            .map(|s| format!("{} {}", s.pid, s.level))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}
