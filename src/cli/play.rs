//! Line-oriented game charting.
//!
//! Each input line is one command. Bad input is reported and leaves the
//! session untouched.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::model::{PITCH_TYPES, ParseError, PitchInput};
use crate::session::Session;
use crate::storage::Storage;

use super::format::{format_pitch, format_status};

const HELP: &str = "\
commands:
  pitch <result> <called-zone> <called-off> <actual-zone> <actual-off> [pitch type]
        result: swing-strike swing-foul swing-hit swing-out swing-error
                no-swing-strike no-swing-ball hit-by-pitch
        called-zone 1-4, called-off 1-2,
        actual-zone 0-4 or 1-2 1-3 2-4 3-4, actual-off 1 2 3+
  out               record an out not tied to a pitch
  pitcher <name>    pitching change
  status            count, inning, and pitcher totals
  log               every pitch so far
  export            write the CSV and keep charting
  end               write the CSV, clear the session, and quit
  quit              quit without exporting";

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Pitch(PitchInput),
    Out,
    Pitcher(String),
    Status,
    Log,
    Export,
    End,
    Help,
    Quit,
}

fn parse_line(line: &str, default_pitch_type: &str) -> Result<Option<Line>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let parsed = match command {
        "pitch" | "p" => {
            let args: Vec<&str> = words.collect();
            if args.len() < 5 {
                return Err("usage: pitch <result> <called-zone> <called-off> <actual-zone> <actual-off> [pitch type]".to_string());
            }
            let pitch_type = if args.len() > 5 {
                args[5..].join(" ")
            } else {
                default_pitch_type.to_string()
            };
            Line::Pitch(PitchInput {
                kind: field(args[0])?,
                called_zone: field(args[1])?,
                called_distance: field(args[2])?,
                actual_zone: field(args[3])?,
                actual_distance: field(args[4])?,
                pitch_type,
            })
        }
        "out" => Line::Out,
        "pitcher" => {
            let name = words.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err("usage: pitcher <name>".to_string());
            }
            Line::Pitcher(name)
        }
        "status" => Line::Status,
        "log" => Line::Log,
        "export" => Line::Export,
        "end" => Line::End,
        "help" | "?" => Line::Help,
        "quit" | "q" => Line::Quit,
        other => return Err(format!("unknown command '{other}' (try `help`)")),
    };

    Ok(Some(parsed))
}

fn field<T: FromStr<Err = ParseError>>(word: &str) -> Result<T, String> {
    word.parse().map_err(|e: ParseError| e.to_string())
}

/// Reads commands from `input` until `end`, `quit`, or end of input.
pub(super) fn run(
    session: &mut Session,
    storage: &Storage,
    default_pitch_type: &str,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), String> {
    let write_err = |e: std::io::Error| format!("failed to write output: {e}");

    for line in input.lines() {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;

        let command = match parse_line(&line, default_pitch_type) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(input = %line, "rejected: {e}");
                writeln!(out, "error: {e}").map_err(write_err)?;
                continue;
            }
        };

        match command {
            Line::Pitch(pitch) => {
                if !PITCH_TYPES.contains(&pitch.pitch_type.as_str()) {
                    tracing::debug!(pitch_type = %pitch.pitch_type, "custom pitch type");
                }
                let pitcher = session.pitcher().to_string();
                let record = session.record_pitch(&pitcher, pitch);
                writeln!(out, "{}", format_pitch(&record)).map_err(write_err)?;
                writeln!(out, "{}", format_status(session)).map_err(write_err)?;
            }
            Line::Out => {
                session.add_manual_out();
                writeln!(out, "{}", format_status(session)).map_err(write_err)?;
            }
            Line::Pitcher(name) => {
                session.change_pitcher(&name);
                writeln!(out, "{}", format_status(session)).map_err(write_err)?;
            }
            Line::Status => {
                writeln!(out, "{}", format_status(session)).map_err(write_err)?;
            }
            Line::Log => {
                if session.pitches().is_empty() {
                    writeln!(out, "no pitches yet").map_err(write_err)?;
                }
                for record in session.pitches() {
                    writeln!(out, "{}", format_pitch(record)).map_err(write_err)?;
                }
            }
            Line::Export => {
                export(session, storage, out)?;
            }
            Line::End => {
                // Only clear once the data is safely on disk.
                if export(session, storage, out)? {
                    session.reset();
                    return Ok(());
                }
            }
            Line::Help => writeln!(out, "{HELP}").map_err(write_err)?,
            Line::Quit => return Ok(()),
        }
    }

    Ok(())
}

/// Writes the export and reports the outcome. Returns whether it succeeded.
fn export(session: &Session, storage: &Storage, out: &mut impl Write) -> Result<bool, String> {
    let at = jiff::Zoned::now().datetime();
    let written = match storage.write_export(session, at) {
        Ok(path) => {
            writeln!(out, "exported {} pitch(es) to {}", session.pitches().len(), path.display())
                .map(|()| true)
        }
        Err(e) => {
            tracing::warn!("export failed: {e}");
            writeln!(out, "error: export failed, nothing was cleared: {e}").map(|()| false)
        }
    };
    written.map_err(|e| format!("failed to write output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    use crate::model::{ActualDistance, ActualZone, CalledDistance, CalledZone, PitchResultKind};

    fn play(session: &mut Session, storage: &Storage, script: &str) -> String {
        let mut out = Vec::new();
        run(session, storage, "Fastball", script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn started() -> Session {
        let mut session = Session::new();
        session.start_session("Avery", Some("Case Western"));
        session
    }

    #[test]
    fn parses_pitch_with_multi_word_type() {
        let line = parse_line("pitch swing-foul 4 2 3-4 3+ Drop Curve", "Fastball")
            .unwrap()
            .unwrap();
        assert_eq!(
            line,
            Line::Pitch(PitchInput {
                called_zone: CalledZone::try_from(4).unwrap(),
                pitch_type: "Drop Curve".into(),
                called_distance: CalledDistance::Two,
                actual_zone: ActualZone::ThreeFour,
                actual_distance: ActualDistance::ThreePlus,
                kind: PitchResultKind::SwingFoul,
            })
        );
    }

    #[test]
    fn pitch_type_defaults_when_missing() {
        let Some(Line::Pitch(input)) = parse_line("p no-swing-ball 1 1 0 1", "Rise").unwrap()
        else {
            panic!("expected a pitch");
        };
        assert_eq!(input.pitch_type, "Rise");
    }

    #[test]
    fn rejects_bad_pitch_fields() {
        assert!(parse_line("pitch swing-foul 5 1 0 1", "Fastball").is_err());
        assert!(parse_line("pitch swing-foul 1 1 2-3 1", "Fastball").is_err());
        assert!(parse_line("pitch bunt 1 1 0 1", "Fastball").is_err());
        assert!(parse_line("pitch swing-foul 1 1", "Fastball").is_err());
        assert!(parse_line("pitcher", "Fastball").is_err());
        assert!(parse_line("steal", "Fastball").is_err());
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line("   ", "Fastball").unwrap(), None);
    }

    #[test]
    fn charts_pitches_and_outs() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let mut session = started();

        let output = play(
            &mut session,
            &storage,
            "pitch no-swing-ball 2 1 1-2 3+ Drop\n\
             pitch nonsense\n\
             pitch swing-out 4 2 0 1\n\
             out\n\
             pitcher Blake Smith\n\
             status\n\
             quit\n\
             out\n",
        );

        assert_eq!(session.pitch_total(), 2);
        assert_eq!(session.inning_string(), "1.2");
        assert_eq!(session.pitcher(), "Blake Smith");
        assert_eq!(session.pitches()[1].pitch_type, "Fastball");
        assert!(output.contains("error: usage: pitch"));
        assert!(output.contains("#2 Avery Fastball (1-0) swing-out"));
        assert!(storage.list_exports().unwrap().is_empty());
    }

    #[test]
    fn end_exports_then_resets() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let mut session = started();

        let output = play(
            &mut session,
            &storage,
            "pitch hit-by-pitch 1 1 1 1\nend\npitch swing-hit 1 1 1 1\n",
        );

        let exports = storage.list_exports().unwrap();
        assert_eq!(exports.len(), 1);
        let csv = fs::read_to_string(&exports[0]).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(output.contains("exported 1 pitch(es)"));
        assert!(session.pitches().is_empty());
    }

    #[test]
    fn failed_end_keeps_the_session() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("exports");
        let storage = Storage::new(&root).unwrap();
        fs::remove_dir_all(&root).unwrap();
        let mut session = started();

        let output = play(&mut session, &storage, "pitch swing-foul 1 1 1 1\nend\n");

        assert!(output.contains("error: export failed, nothing was cleared"));
        assert_eq!(session.pitches().len(), 1);
        assert_eq!(session.current_count_string(), "0-1");
    }
}
