//! The game session: pitch log, running counters, count, and inning.
//!
//! A [`Session`] is the single owner of game state. Screens and commands
//! hold it and call its operations; nothing else mutates it. Observers
//! registered with [`Session::subscribe`] hear about every change after
//! the state is consistent again.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    Count, InningState, PitchInput, PitchRecord, PitchResultKind, classify,
};

/// Opponent name used when none is given.
pub const PRACTICE_OPPONENT: &str = "Practice";

/// Column names of the CSV export, in order.
pub const CSV_HEADER: [&str; 18] = [
    "pitchNum",
    "pitcher",
    "pitcherPitchNum",
    "batterNum",
    "pitcherBatterNum",
    "pitchCount",
    "calledPitchZone",
    "pitchType",
    "calledBallsOffPlate",
    "actualPitchZone",
    "actualBallsOffPlate",
    "isStrike",
    "isHBP",
    "didSwing",
    "madeContact",
    "isHit",
    "isOut",
    "isError",
];

const STRIKES_PER_OUT: u8 = 3;
const BALLS_PER_WALK: u8 = 4;
const OUTS_PER_INNING: u8 = 3;

/// Running totals for one pitcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitcherStats {
    pub pitch_count: u32,
    pub batter_count: u32,
}

/// A change to the session, delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent<'a> {
    Started { pitcher: &'a str, opponent: &'a str },
    PitchRecorded(&'a PitchRecord),
    /// An out was recorded; carries the inning state after it.
    OutRecorded(InningState),
    /// The third out closed the inning; carries the new inning.
    InningAdvanced(InningState),
    PitcherChanged(&'a str),
    Reset,
}

/// Receives session events.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent<'_>);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent<'_>),
{
    fn on_event(&mut self, event: &SessionEvent<'_>) {
        self(event);
    }
}

/// One game (or practice) being charted.
pub struct Session {
    pitcher: String,
    opponent: String,
    pitches: Vec<PitchRecord>,
    pitch_total: u32,
    batter_total: u32,
    pitcher_stats: HashMap<String, PitcherStats>,
    count: Count,
    inning: InningState,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("pitcher", &self.pitcher)
            .field("opponent", &self.opponent)
            .field("pitches", &self.pitches.len())
            .field("count", &self.count)
            .field("inning", &self.inning)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// An empty session against the practice opponent, with no pitcher.
    pub fn new() -> Self {
        Self {
            pitcher: String::new(),
            opponent: PRACTICE_OPPONENT.to_string(),
            pitches: Vec::new(),
            pitch_total: 0,
            batter_total: 0,
            pitcher_stats: HashMap::new(),
            count: Count::default(),
            inning: InningState::default(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all subsequent changes.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ── Mutations ──

    /// Starts a fresh session for `pitcher` against `opponent`.
    ///
    /// A missing or blank opponent means practice.
    pub fn start_session(&mut self, pitcher: &str, opponent: Option<&str>) {
        self.pitcher = pitcher.to_string();
        self.opponent = match opponent.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => PRACTICE_OPPONENT.to_string(),
        };
        self.clear();

        tracing::info!(pitcher = %self.pitcher, opponent = %self.opponent, "session started");
        notify(
            &mut self.observers,
            &SessionEvent::Started {
                pitcher: &self.pitcher,
                opponent: &self.opponent,
            },
        );
    }

    /// Records one pitch thrown by `pitcher` and returns the appended record.
    ///
    /// The record captures the count and inning as they stood before the
    /// pitch. The count, batter, and out bookkeeping then advance from the
    /// result kind.
    pub fn record_pitch(&mut self, pitcher: &str, input: PitchInput) -> PitchRecord {
        let outcome = classify(input.kind);
        let count_before = self.count;
        let inning_before = self.inning;

        match input.kind {
            PitchResultKind::SwingStrike | PitchResultKind::NoSwingStrike => {
                if self.count.strikes < STRIKES_PER_OUT {
                    self.count.strikes += 1;
                }
            }
            // A foul never completes a strikeout.
            PitchResultKind::SwingFoul => {
                if self.count.strikes < STRIKES_PER_OUT - 1 {
                    self.count.strikes += 1;
                }
            }
            PitchResultKind::NoSwingBall => self.count.balls += 1,
            PitchResultKind::SwingHit
            | PitchResultKind::SwingOut
            | PitchResultKind::SwingError
            | PitchResultKind::HitByPitch => {}
        }

        let is_strikeout = self.count.strikes >= STRIKES_PER_OUT && outcome.is_strike;
        let is_recorded_out = outcome.is_out || is_strikeout;

        let is_new_batter = match input.kind {
            PitchResultKind::HitByPitch
            | PitchResultKind::SwingHit
            | PitchResultKind::SwingOut
            | PitchResultKind::SwingError => true,
            PitchResultKind::NoSwingBall => self.count.balls >= BALLS_PER_WALK,
            PitchResultKind::SwingStrike
            | PitchResultKind::NoSwingStrike
            | PitchResultKind::SwingFoul => self.count.strikes >= STRIKES_PER_OUT,
        };

        if is_new_batter {
            self.count = Count::default();
            self.batter_total += 1;
        }

        self.pitch_total += 1;
        let stats = self.pitcher_stats.entry(pitcher.to_string()).or_default();
        stats.pitch_count += 1;
        if is_new_batter {
            stats.batter_count += 1;
        }
        let stats = *stats;

        let record = PitchRecord {
            pitch_number: self.pitch_total,
            pitcher_pitch_number: stats.pitch_count,
            batter_number: self.batter_total,
            pitcher_batter_number: stats.batter_count,
            pitcher: pitcher.to_string(),
            count_before,
            inning_before,
            called_zone: input.called_zone,
            pitch_type: input.pitch_type,
            called_distance: input.called_distance,
            actual_zone: input.actual_zone,
            actual_distance: input.actual_distance,
            kind: input.kind,
            outcome,
            is_recorded_out,
            is_new_batter,
        };
        self.pitches.push(record.clone());

        let inning_advanced = is_recorded_out && self.advance_out();

        tracing::debug!(
            pitch = record.pitch_number,
            kind = %record.kind,
            count_before = %record.count_before,
            count = %self.count,
            inning = %self.inning,
            "pitch recorded"
        );

        notify(&mut self.observers, &SessionEvent::PitchRecorded(&record));
        if is_recorded_out {
            self.notify_out(inning_advanced);
        }

        record
    }

    /// Records an out that no tracked pitch produced, such as a
    /// baserunning out.
    pub fn add_manual_out(&mut self) {
        let inning_advanced = self.advance_out();
        tracing::debug!(inning = %self.inning, "manual out");
        self.notify_out(inning_advanced);
    }

    /// Puts `name` in the circle. A returning pitcher resumes their totals.
    ///
    /// Count, inning, and outs carry over.
    pub fn change_pitcher(&mut self, name: &str) {
        self.pitcher = name.to_string();
        self.pitcher_stats.entry(name.to_string()).or_default();

        tracing::info!(pitcher = %self.pitcher, "pitcher changed");
        notify(&mut self.observers, &SessionEvent::PitcherChanged(&self.pitcher));
    }

    /// Clears the log, counters, pitcher totals, count, and inning.
    ///
    /// Pitcher and opponent names are kept.
    pub fn reset(&mut self) {
        self.clear();
        tracing::debug!("session reset");
        notify(&mut self.observers, &SessionEvent::Reset);
    }

    fn clear(&mut self) {
        self.pitches.clear();
        self.pitch_total = 0;
        self.batter_total = 0;
        self.pitcher_stats.clear();
        self.count = Count::default();
        self.inning = InningState::default();
    }

    /// Adds an out, rolling over to a new inning on the third.
    ///
    /// Returns true when the inning advanced.
    fn advance_out(&mut self) -> bool {
        self.inning.outs += 1;
        if self.inning.outs >= OUTS_PER_INNING {
            self.inning.inning += 1;
            self.inning.outs = 0;
            tracing::debug!(inning = self.inning.inning, "inning advanced");
            return true;
        }
        false
    }

    fn notify_out(&mut self, inning_advanced: bool) {
        notify(&mut self.observers, &SessionEvent::OutRecorded(self.inning));
        if inning_advanced {
            notify(&mut self.observers, &SessionEvent::InningAdvanced(self.inning));
        }
    }

    // ── Queries ──

    pub fn pitches(&self) -> &[PitchRecord] {
        &self.pitches
    }

    pub fn pitcher(&self) -> &str {
        &self.pitcher
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    /// Pitches recorded this session.
    pub fn pitch_total(&self) -> u32 {
        self.pitch_total
    }

    /// At-bats completed this session.
    pub fn batter_total(&self) -> u32 {
        self.batter_total
    }

    pub fn count(&self) -> Count {
        self.count
    }

    pub fn inning(&self) -> InningState {
        self.inning
    }

    /// The live count as `balls-strikes`.
    pub fn current_count_string(&self) -> String {
        self.count.to_string()
    }

    /// The inning as `inning.outs`.
    pub fn inning_string(&self) -> String {
        self.inning.to_string()
    }

    /// Totals for `name`, if they have pitched or been brought in.
    pub fn pitcher_stats(&self, name: &str) -> Option<PitcherStats> {
        self.pitcher_stats.get(name).copied()
    }

    /// Totals for the pitcher currently in the circle.
    pub fn current_pitcher_stats(&self) -> PitcherStats {
        self.pitcher_stats(&self.pitcher).unwrap_or_default()
    }

    /// The pitch log as CSV rows: the header, then one row per pitch in
    /// the order thrown.
    pub fn export_records(&self) -> Vec<Vec<String>> {
        let header = CSV_HEADER.iter().map(|s| (*s).to_string()).collect();
        std::iter::once(header)
            .chain(self.pitches.iter().map(record_row))
            .collect()
    }
}

fn record_row(record: &PitchRecord) -> Vec<String> {
    let o = &record.outcome;
    vec![
        record.pitch_number.to_string(),
        record.pitcher.clone(),
        record.pitcher_pitch_number.to_string(),
        record.batter_number.to_string(),
        record.pitcher_batter_number.to_string(),
        record.count_before.to_string(),
        record.called_zone.to_string(),
        record.pitch_type.clone(),
        record.called_distance.to_string(),
        record.actual_zone.to_string(),
        record.actual_distance.to_string(),
        o.is_strike.to_string(),
        o.is_hit_by_pitch.to_string(),
        o.did_swing.to_string(),
        o.made_contact.to_string(),
        o.is_hit.to_string(),
        record.is_recorded_out.to_string(),
        o.is_error.to_string(),
    ]
}

fn notify(observers: &mut [Box<dyn SessionObserver>], event: &SessionEvent<'_>) {
    for observer in observers {
        observer.on_event(event);
    }
}
