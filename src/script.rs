//! Game scripts: a charted game as JSONL, one event per line.
//!
//! ```text
//! {"event":"start","pitcher":"Avery","opponent":"Case Western"}
//! {"event":"pitch","kind":"no-swing-ball","calledZone":2,"pitchType":"Drop","calledDistance":1,"actualZone":"1-2","actualDistance":3}
//! {"event":"out"}
//! {"event":"pitcher","name":"Blake"}
//! ```
//!
//! Replaying a script drives a [`Session`] through the same operations the
//! live recorder uses.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::model::PitchInput;
use crate::session::Session;

/// Errors from loading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A single entry in a game script.
///
/// Tagged enum so each line is self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GameEvent {
    /// Start over with a pitcher and optional opponent.
    Start {
        pitcher: String,
        #[serde(default)]
        opponent: Option<String>,
    },

    /// A pitch by the pitcher currently in the circle.
    Pitch(PitchInput),

    /// An out not tied to a pitch.
    Out,

    /// A pitching change.
    Pitcher { name: String },

    /// Clear the log and counters.
    Reset,
}

/// Parses script text. Blank lines are skipped.
pub fn parse(text: &str) -> Result<Vec<GameEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| ScriptError::Json {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Loads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<GameEvent>, ScriptError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Applies events to the session in order.
pub fn apply(session: &mut Session, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Start { pitcher, opponent } => {
                session.start_session(pitcher, opponent.as_deref());
            }
            GameEvent::Pitch(input) => {
                let pitcher = session.pitcher().to_string();
                session.record_pitch(&pitcher, input.clone());
            }
            GameEvent::Out => session.add_manual_out(),
            GameEvent::Pitcher { name } => session.change_pitcher(name),
            GameEvent::Reset => session.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::model::{ActualDistance, ActualZone, PitchResultKind};

    const SCRIPT: &str = r#"
{"event":"start","pitcher":"Avery","opponent":"Case Western"}
{"event":"pitch","kind":"no-swing-strike","calledZone":2,"pitchType":"Drop","calledDistance":1,"actualZone":"1-2","actualDistance":1}

{"event":"pitch","kind":"swing-out","calledZone":4,"pitchType":"Change Up","calledDistance":2,"actualZone":"0","actualDistance":3}
{"event":"pitcher","name":"Blake"}
{"event":"out"}
{"event":"pitch","kind":"hit-by-pitch","calledZone":1,"pitchType":"Rise","calledDistance":1,"actualZone":"3","actualDistance":2}
"#;

    #[test]
    fn parses_each_event_kind() {
        let events = parse(SCRIPT).unwrap();

        assert_eq!(events.len(), 6);
        assert!(matches!(
            &events[0],
            GameEvent::Start { pitcher, opponent: Some(opponent) }
                if pitcher == "Avery" && opponent == "Case Western"
        ));
        let GameEvent::Pitch(input) = &events[2] else {
            panic!("expected a pitch, got {:?}", events[2]);
        };
        assert_eq!(input.kind, PitchResultKind::SwingOut);
        assert_eq!(input.actual_zone, ActualZone::Middle);
        assert_eq!(input.actual_distance, ActualDistance::ThreePlus);
        assert_eq!(input.pitch_type, "Change Up");
        assert_eq!(events[4], GameEvent::Out);
    }

    #[test]
    fn opponent_is_optional() {
        let events = parse(r#"{"event":"start","pitcher":"Avery"}"#).unwrap();
        assert_eq!(
            events[0],
            GameEvent::Start {
                pitcher: "Avery".into(),
                opponent: None,
            }
        );
    }

    #[test]
    fn reports_line_of_bad_event() {
        let text = "{\"event\":\"out\"}\n{\"event\":\"pitch\",\"kind\":\"bunt\"}\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, ScriptError::Json { line: 2, .. }));
    }

    #[test]
    fn rejects_out_of_range_zone() {
        let text = r#"{"event":"pitch","kind":"swing-foul","calledZone":7,"pitchType":"Drop","calledDistance":1,"actualZone":"1","actualDistance":1}"#;
        assert!(matches!(parse(text), Err(ScriptError::Json { line: 1, .. })));
    }

    #[test]
    fn replays_into_session() {
        let mut session = Session::new();
        apply(&mut session, &parse(SCRIPT).unwrap());

        assert_eq!(session.pitch_total(), 3);
        assert_eq!(session.batter_total(), 2);
        assert_eq!(session.inning_string(), "1.2");
        assert_eq!(session.pitcher(), "Blake");

        let pitches = session.pitches();
        assert_eq!(pitches[1].count_before.to_string(), "0-1");
        assert!(pitches[1].is_recorded_out);
        assert_eq!(pitches[2].pitcher, "Blake");
        assert_eq!(pitches[2].pitcher_pitch_number, 1);
        assert_eq!(pitches[2].pitcher_batter_number, 1);
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.jsonl");
        fs::write(&path, SCRIPT).unwrap();

        assert_eq!(load(&path).unwrap().len(), 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("nope.jsonl")).unwrap_err();
        assert!(matches!(err, ScriptError::Io(_)));
    }
}
