//! Pitch records and the game-state snapshots they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ActualDistance, ActualZone, CalledDistance, CalledZone, PitchOutcome, PitchResultKind};

/// Balls and strikes for the batter at the plate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

/// Inning number and outs recorded in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningState {
    pub inning: u32,
    pub outs: u8,
}

impl Default for InningState {
    fn default() -> Self {
        Self { inning: 1, outs: 0 }
    }
}

impl fmt::Display for InningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.inning, self.outs)
    }
}

/// What the coach entered for one pitch: the call, then the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchInput {
    pub called_zone: CalledZone,
    pub pitch_type: String,
    pub called_distance: CalledDistance,
    pub actual_zone: ActualZone,
    pub actual_distance: ActualDistance,
    pub kind: PitchResultKind,
}

/// One row of the pitch log. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchRecord {
    pub pitch_number: u32,
    pub pitcher_pitch_number: u32,
    pub batter_number: u32,
    pub pitcher_batter_number: u32,

    pub pitcher: String,
    /// The count before this pitch was thrown.
    pub count_before: Count,
    pub inning_before: InningState,

    pub called_zone: CalledZone,
    pub pitch_type: String,
    pub called_distance: CalledDistance,

    pub actual_zone: ActualZone,
    pub actual_distance: ActualDistance,
    pub kind: PitchResultKind,
    pub outcome: PitchOutcome,

    /// Batted-ball out or strikeout.
    pub is_recorded_out: bool,
    /// This pitch ended the at-bat.
    pub is_new_batter: bool,
}
