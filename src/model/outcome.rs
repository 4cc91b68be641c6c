//! Outcome classification: what a pitch result means for the box score.
//!
//! Each [`PitchResultKind`] maps to exactly one [`PitchOutcome`] through a
//! fixed table. No state, no failure mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// The eight ways a pitch can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PitchResultKind {
    SwingStrike,
    SwingFoul,
    SwingHit,
    SwingOut,
    SwingError,
    NoSwingStrike,
    NoSwingBall,
    HitByPitch,
}

impl PitchResultKind {
    /// Every kind, in classifier table order.
    pub const ALL: [Self; 8] = [
        Self::SwingStrike,
        Self::SwingFoul,
        Self::SwingHit,
        Self::SwingOut,
        Self::SwingError,
        Self::NoSwingStrike,
        Self::NoSwingBall,
        Self::HitByPitch,
    ];

    /// The kebab-case name used in scripts and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SwingStrike => "swing-strike",
            Self::SwingFoul => "swing-foul",
            Self::SwingHit => "swing-hit",
            Self::SwingOut => "swing-out",
            Self::SwingError => "swing-error",
            Self::NoSwingStrike => "no-swing-strike",
            Self::NoSwingBall => "no-swing-ball",
            Self::HitByPitch => "hit-by-pitch",
        }
    }

    /// The boolean facts this result implies.
    pub fn outcome(self) -> PitchOutcome {
        classify(self)
    }
}

impl fmt::Display for PitchResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchResultKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::UnknownResultKind(s.to_string()))
    }
}

/// Seven independent facts about how a pitch ended.
///
/// `is_out` here is the batted-ball out only. Strikeouts are derived by the
/// session, which knows the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchOutcome {
    pub is_strike: bool,
    pub is_hit_by_pitch: bool,
    pub did_swing: bool,
    pub made_contact: bool,
    pub is_hit: bool,
    pub is_out: bool,
    pub is_error: bool,
}

/// Map a result kind to its outcome facts.
pub fn classify(kind: PitchResultKind) -> PitchOutcome {
    // Columns: strike, hbp, swing, contact, hit, out, error.
    let (is_strike, is_hit_by_pitch, did_swing, made_contact, is_hit, is_out, is_error) =
        match kind {
            PitchResultKind::SwingStrike => (true, false, true, false, false, false, false),
            PitchResultKind::SwingFoul => (true, false, true, true, false, false, false),
            PitchResultKind::SwingHit => (true, false, true, true, true, false, false),
            PitchResultKind::SwingOut => (true, false, true, true, false, true, false),
            PitchResultKind::SwingError => (true, false, true, true, false, false, true),
            PitchResultKind::NoSwingStrike => (true, false, false, false, false, false, false),
            PitchResultKind::NoSwingBall => (false, false, false, false, false, false, false),
            PitchResultKind::HitByPitch => (false, true, false, false, false, false, false),
        };

    PitchOutcome {
        is_strike,
        is_hit_by_pitch,
        did_swing,
        made_contact,
        is_hit,
        is_out,
        is_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(o: PitchOutcome) -> [bool; 7] {
        [
            o.is_strike,
            o.is_hit_by_pitch,
            o.did_swing,
            o.made_contact,
            o.is_hit,
            o.is_out,
            o.is_error,
        ]
    }

    #[test]
    fn classifies_every_kind_per_table() {
        const T: bool = true;
        const F: bool = false;
        let cases = [
            (PitchResultKind::SwingStrike, [T, F, T, F, F, F, F]),
            (PitchResultKind::SwingFoul, [T, F, T, T, F, F, F]),
            (PitchResultKind::SwingHit, [T, F, T, T, T, F, F]),
            (PitchResultKind::SwingOut, [T, F, T, T, F, T, F]),
            (PitchResultKind::SwingError, [T, F, T, T, F, F, T]),
            (PitchResultKind::NoSwingStrike, [T, F, F, F, F, F, F]),
            (PitchResultKind::NoSwingBall, [F, F, F, F, F, F, F]),
            (PitchResultKind::HitByPitch, [F, T, F, F, F, F, F]),
        ];
        for (kind, expected) in cases {
            assert_eq!(facts(classify(kind)), expected, "{kind}");
        }
    }

    #[test]
    fn outcome_facts_are_consistent() {
        for kind in PitchResultKind::ALL {
            let o = kind.outcome();
            if o.is_hit_by_pitch {
                assert_eq!(facts(o).iter().filter(|b| **b).count(), 1, "{kind}");
            }
            if o.made_contact {
                assert!(o.did_swing, "{kind}");
            }
            if o.is_hit || o.is_out || o.is_error {
                assert!(o.made_contact, "{kind}");
            }
        }
    }

    #[test]
    fn parses_kebab_case_names() {
        for kind in PitchResultKind::ALL {
            assert_eq!(kind.as_str().parse::<PitchResultKind>().unwrap(), kind);
        }
        assert!(matches!(
            "bunt".parse::<PitchResultKind>(),
            Err(ParseError::UnknownResultKind(_))
        ));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&PitchResultKind::HitByPitch).unwrap();
        assert_eq!(json, "\"hit-by-pitch\"");
    }
}
