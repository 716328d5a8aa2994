//! The atomic unit of history: the total of one three-dice roll.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_THRESHOLD, MAX_TOTAL, MIN_TOTAL};
use crate::errors::OutcomeError;

/// High/low classification of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    High,
    Low,
}

impl Side {
    /// Single-character symbol used in pattern strings.
    pub fn symbol(self) -> char {
        match self {
            Side::High => 'H',
            Side::Low => 'L',
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::High => Side::Low,
            Side::Low => Side::High,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::High => write!(f, "High"),
            Side::Low => write!(f, "Low"),
        }
    }
}

/// Even/odd classification of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

/// One recorded round outcome. Immutable once built.
///
/// Serializes as the bare total so recorded histories are plain integer arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Outcome {
    total: u8,
}

impl Outcome {
    /// Build an outcome from a total in `3..=18`.
    pub fn new(total: u32) -> Result<Self, OutcomeError> {
        if total < MIN_TOTAL as u32 || total > MAX_TOTAL as u32 {
            return Err(OutcomeError::TotalOutOfRange { total });
        }
        Ok(Self { total: total as u8 })
    }

    /// Build an outcome from three die faces, each in `1..=6`.
    pub fn from_dice(dice: [u32; 3]) -> Result<Self, OutcomeError> {
        if let Some(&face) = dice.iter().find(|&&d| !(1..=6).contains(&d)) {
            return Err(OutcomeError::FaceOutOfRange { face });
        }
        Self::new(dice.iter().sum())
    }

    pub fn total(self) -> u8 {
        self.total
    }

    pub fn is_high(self) -> bool {
        self.total >= HIGH_THRESHOLD
    }

    pub fn is_even(self) -> bool {
        self.total % 2 == 0
    }

    pub fn side(self) -> Side {
        if self.is_high() {
            Side::High
        } else {
            Side::Low
        }
    }

    pub fn parity(self) -> Parity {
        if self.is_even() {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl TryFrom<u32> for Outcome {
    type Error = OutcomeError;

    fn try_from(total: u32) -> Result<Self, Self::Error> {
        Self::new(total)
    }
}

impl From<Outcome> for u32 {
    fn from(outcome: Outcome) -> Self {
        outcome.total as u32
    }
}

/// A finished round as announced by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    round_id: u64,
    dice: [u8; 3],
    outcome: Outcome,
}

impl RoundResult {
    /// Validate the dice faces and derive the outcome.
    pub fn new(round_id: u64, dice: [u32; 3]) -> Result<Self, OutcomeError> {
        let outcome = Outcome::from_dice(dice)?;
        Ok(Self {
            round_id,
            dice: dice.map(|d| d as u8),
            outcome,
        })
    }

    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    pub fn dice(&self) -> [u8; 3] {
        self.dice
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// The next round as announced by the feed, before it is rolled.
/// `md5` is the hash commitment published for that round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingRound {
    pub round_id: u64,
    pub md5: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_boundaries() {
        let ten = Outcome::new(10).unwrap();
        let eleven = Outcome::new(11).unwrap();
        assert_eq!(ten.side(), Side::Low);
        assert_eq!(eleven.side(), Side::High);
        assert_eq!(ten.parity(), Parity::Even);
        assert_eq!(eleven.parity(), Parity::Odd);
    }

    #[test]
    fn rejects_out_of_range_totals() {
        assert_eq!(
            Outcome::new(2),
            Err(OutcomeError::TotalOutOfRange { total: 2 })
        );
        assert!(Outcome::new(19).is_err());
        assert!(Outcome::new(3).is_ok());
        assert!(Outcome::new(18).is_ok());
    }

    #[test]
    fn from_dice_checks_faces() {
        assert_eq!(Outcome::from_dice([1, 2, 3]).unwrap().total(), 6);
        assert_eq!(
            Outcome::from_dice([0, 6, 6]),
            Err(OutcomeError::FaceOutOfRange { face: 0 })
        );
        assert!(Outcome::from_dice([7, 1, 1]).is_err());
    }

    #[test]
    fn serde_uses_bare_total() {
        let json = serde_json::to_string(&Outcome::new(14).unwrap()).unwrap();
        assert_eq!(json, "14");
        let parsed: Vec<Outcome> = serde_json::from_str("[3, 18]").unwrap();
        assert_eq!(parsed[1].total(), 18);
        assert!(serde_json::from_str::<Outcome>("20").is_err());
    }

    #[test]
    fn side_opposite_and_symbol() {
        assert_eq!(Side::High.opposite(), Side::Low);
        assert_eq!(Side::Low.opposite(), Side::High);
        assert_eq!(Side::High.symbol(), 'H');
        assert_eq!(Side::Low.to_string(), "Low");
    }
}
