//! Output formatting for CLI display.

use std::fmt::Write;

use crate::model::{PitchRecord, PitchResultKind};
use crate::session::{Session, SessionEvent};

/// One-line summary of where the game stands.
pub(super) fn format_status(session: &Session) -> String {
    let stats = session.current_pitcher_stats();
    format!(
        "{} | pitches {} | batters {} | count {} | inning {} | outs {}",
        session.pitcher(),
        stats.pitch_count,
        stats.batter_count,
        session.current_count_string(),
        session.inning().inning,
        session.inning().outs,
    )
}

/// Short description of a recorded pitch.
pub(super) fn format_pitch(record: &PitchRecord) -> String {
    let mut line = format!(
        "#{} {} {} ({}) {} → zone {}, {} off",
        record.pitch_number,
        record.pitcher,
        record.pitch_type,
        record.count_before,
        record.kind,
        record.actual_zone,
        record.actual_distance,
    );
    if record.actual_zone.is_between() {
        line.push_str(" [between zones]");
    }
    if record.is_recorded_out {
        line.push_str(" [out]");
    }
    if record.is_new_batter {
        line.push_str(" [next batter]");
    }
    line
}

/// Classifier table, one row per kind.
pub(super) fn format_classify_table(kinds: &[PitchResultKind]) -> String {
    let mut out = String::from(
        "kind             strike hbp   swing contact hit   out   error\n",
    );
    for kind in kinds {
        let o = kind.outcome();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<16} {:<6} {:<5} {:<5} {:<7} {:<5} {:<5} {}",
            kind.as_str(),
            o.is_strike,
            o.is_hit_by_pitch,
            o.did_swing,
            o.made_contact,
            o.is_hit,
            o.is_out,
            o.is_error,
        );
    }
    out
}

/// Logs session changes. Registered as a session observer.
pub(super) fn log_event(event: &SessionEvent<'_>) {
    match event {
        SessionEvent::Started { pitcher, opponent } => {
            tracing::debug!(%pitcher, %opponent, "observer: session started");
        }
        SessionEvent::PitchRecorded(record) => {
            tracing::debug!(pitch = record.pitch_number, kind = %record.kind, "observer: pitch");
        }
        SessionEvent::OutRecorded(inning) => {
            tracing::debug!(%inning, "observer: out");
        }
        SessionEvent::InningAdvanced(inning) => {
            tracing::info!(inning = inning.inning, "inning over");
        }
        SessionEvent::PitcherChanged(name) => {
            tracing::debug!(pitcher = %name, "observer: pitching change");
        }
        SessionEvent::Reset => tracing::debug!("observer: session reset"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{ActualDistance, ActualZone, CalledDistance, CalledZone, PitchInput};

    fn session_after(kinds: &[PitchResultKind]) -> Session {
        let mut session = Session::new();
        session.start_session("Avery", None);
        for kind in kinds {
            session.record_pitch(
                "Avery",
                PitchInput {
                    called_zone: CalledZone::try_from(3).unwrap(),
                    pitch_type: "Screw".into(),
                    called_distance: CalledDistance::One,
                    actual_zone: ActualZone::TwoFour,
                    actual_distance: ActualDistance::One,
                    kind: *kind,
                },
            );
        }
        session
    }

    #[test]
    fn status_shows_pitcher_totals_count_and_inning() {
        let session = session_after(&[
            PitchResultKind::NoSwingBall,
            PitchResultKind::SwingOut,
            PitchResultKind::SwingFoul,
        ]);
        assert_eq!(
            format_status(&session),
            "Avery | pitches 3 | batters 1 | count 0-1 | inning 1 | outs 1"
        );
    }

    #[test]
    fn pitch_line_flags_outs_and_new_batters() {
        let session = session_after(&[PitchResultKind::SwingOut]);
        assert_eq!(
            format_pitch(&session.pitches()[0]),
            "#1 Avery Screw (0-0) swing-out → zone 2-4, 1 off [between zones] [out] [next batter]"
        );
    }

    #[test]
    fn classify_table_has_row_per_kind() {
        let table = format_classify_table(&PitchResultKind::ALL);
        assert_eq!(table.lines().count(), 9);
        let hbp = table.lines().last().unwrap();
        assert!(hbp.starts_with("hit-by-pitch"));
        assert_eq!(
            hbp.split_whitespace().collect::<Vec<_>>(),
            ["hit-by-pitch", "false", "true", "false", "false", "false", "false", "false"]
        );
    }
}
