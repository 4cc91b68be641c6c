//! Pitch location: zones and distance off the plate.
//!
//! The coach calls one of four quadrants. The actual location is picked
//! from a 3x3 grid that adds the heart of the plate and the seams
//! between quadrants:
//!
//! ```text
//!   3   3-4   4
//!  1-3   0   2-4
//!   1   1-2   2
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// The quadrant the coach called, 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CalledZone(u8);

impl CalledZone {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CalledZone {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::CalledZone(value.to_string()))
        }
    }
}

impl From<CalledZone> for u8 {
    fn from(zone: CalledZone) -> Self {
        zone.0
    }
}

impl FromStr for CalledZone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map_err(|_| ParseError::CalledZone(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for CalledZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the pitch actually crossed, including the between-zone seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActualZone {
    #[serde(rename = "0")]
    Middle,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "1-2")]
    OneTwo,
    #[serde(rename = "1-3")]
    OneThree,
    #[serde(rename = "2-4")]
    TwoFour,
    #[serde(rename = "3-4")]
    ThreeFour,
}

impl ActualZone {
    pub const ALL: [Self; 9] = [
        Self::Middle,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::OneTwo,
        Self::OneThree,
        Self::TwoFour,
        Self::ThreeFour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Middle => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::OneTwo => "1-2",
            Self::OneThree => "1-3",
            Self::TwoFour => "2-4",
            Self::ThreeFour => "3-4",
        }
    }

    /// True for the seam labels like `1-2`.
    pub fn is_between(self) -> bool {
        matches!(
            self,
            Self::OneTwo | Self::OneThree | Self::TwoFour | Self::ThreeFour
        )
    }
}

impl FromStr for ActualZone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.label() == s)
            .ok_or_else(|| ParseError::ActualZone(s.to_string()))
    }
}

impl fmt::Display for ActualZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How far off the plate the coach wanted the pitch, in ball widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CalledDistance {
    One,
    Two,
}

impl TryFrom<u8> for CalledDistance {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(ParseError::CalledDistance(value.to_string())),
        }
    }
}

impl From<CalledDistance> for u8 {
    fn from(distance: CalledDistance) -> Self {
        match distance {
            CalledDistance::One => 1,
            CalledDistance::Two => 2,
        }
    }
}

impl FromStr for CalledDistance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map_err(|_| ParseError::CalledDistance(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for CalledDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// How far off the plate the pitch actually was. Anything past two ball
/// widths is recorded as `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActualDistance {
    One,
    Two,
    ThreePlus,
}

impl TryFrom<u8> for ActualDistance {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::ThreePlus),
            _ => Err(ParseError::ActualDistance(value.to_string())),
        }
    }
}

impl From<ActualDistance> for u8 {
    fn from(distance: ActualDistance) -> Self {
        match distance {
            ActualDistance::One => 1,
            ActualDistance::Two => 2,
            ActualDistance::ThreePlus => 3,
        }
    }
}

impl FromStr for ActualDistance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The selector shows "3+".
        let digits = s.strip_suffix('+').unwrap_or(s);
        digits
            .parse::<u8>()
            .map_err(|_| ParseError::ActualDistance(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for ActualDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn called_zone_accepts_one_through_four() {
        for n in 1..=4u8 {
            assert_eq!(CalledZone::try_from(n).unwrap().get(), n);
        }
        assert!(CalledZone::try_from(0).is_err());
        assert!(CalledZone::try_from(5).is_err());
        assert!("x".parse::<CalledZone>().is_err());
    }

    #[test]
    fn actual_zone_labels_round_trip_through_parse() {
        for zone in ActualZone::ALL {
            assert_eq!(zone.label().parse::<ActualZone>().unwrap(), zone);
        }
        assert!("2-3".parse::<ActualZone>().is_err());
        assert!("5".parse::<ActualZone>().is_err());
    }

    #[test]
    fn only_seams_are_between_zones() {
        let seams: Vec<_> = ActualZone::ALL
            .into_iter()
            .filter(|z| z.is_between())
            .map(ActualZone::label)
            .collect();
        assert_eq!(seams, ["1-2", "1-3", "2-4", "3-4"]);
    }

    #[test]
    fn actual_zone_serializes_as_label() {
        let json = serde_json::to_string(&ActualZone::OneThree).unwrap();
        assert_eq!(json, "\"1-3\"");
        let zone: ActualZone = serde_json::from_str("\"0\"").unwrap();
        assert_eq!(zone, ActualZone::Middle);
    }

    #[test]
    fn actual_distance_accepts_three_plus() {
        assert_eq!(
            "3+".parse::<ActualDistance>().unwrap(),
            ActualDistance::ThreePlus
        );
        assert_eq!(ActualDistance::ThreePlus.to_string(), "3");
        assert!("4".parse::<ActualDistance>().is_err());
    }

    #[test]
    fn called_distance_is_one_or_two() {
        assert_eq!("2".parse::<CalledDistance>().unwrap(), CalledDistance::Two);
        assert!("3".parse::<CalledDistance>().is_err());
        let parsed: Result<CalledDistance, _> = serde_json::from_str("3");
        assert!(parsed.is_err());
    }
}
