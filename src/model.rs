//! Core data model for pitch tracking.
//!
//! Result kinds and their outcome facts, pitch locations, and the
//! immutable records a session appends to its log.

mod outcome;
mod pitch;
mod zone;

pub use outcome::{PitchOutcome, PitchResultKind, classify};
pub use pitch::{Count, InningState, PitchInput, PitchRecord};
pub use zone::{ActualDistance, ActualZone, CalledDistance, CalledZone};

/// Pitch types offered on the call screen. Any label is accepted.
pub const PITCH_TYPES: [&str; 7] = [
    "Fastball",
    "Drop",
    "Rise",
    "Curve",
    "Screw",
    "Change Up",
    "Drop Curve",
];

/// Pitch type used when the coach does not pick one.
pub const DEFAULT_PITCH_TYPE: &str = "Fastball";

/// Errors from parsing coach input into typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown pitch result '{0}'")]
    UnknownResultKind(String),

    #[error("called zone must be 1-4, got '{0}'")]
    CalledZone(String),

    #[error("unknown actual zone '{0}' (expected 0-4, 1-2, 1-3, 2-4 or 3-4)")]
    ActualZone(String),

    #[error("called distance must be 1 or 2, got '{0}'")]
    CalledDistance(String),

    #[error("actual distance must be 1, 2 or 3+, got '{0}'")]
    ActualDistance(String),
}
