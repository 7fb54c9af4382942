//! Volleyball player positions.

use crate::error::VolleyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Volleyball court positions.
///
/// Positions are stored in the database as their display name, so the
/// `Display` output is the canonical spelling. Parsing also accepts the
/// common scoresheet abbreviations.
///
/// # Examples
///
/// ```rust
/// use volley_tracker::Position;
///
/// let outside: Position = "OH".parse().unwrap();
/// assert_eq!(outside, Position::Outside);
/// assert_eq!(outside.to_string(), "Outside");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Outside,
    Opposite,
    Middle,
    Setter,
    Libero,
    DefensiveSpecialist,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Outside => "Outside",
            Position::Opposite => "Opposite",
            Position::Middle => "Middle",
            Position::Setter => "Setter",
            Position::Libero => "Libero",
            Position::DefensiveSpecialist => "DS",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = VolleyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OUTSIDE" | "OH" | "OUTSIDE HITTER" => Ok(Position::Outside),
            "OPPOSITE" | "OPP" | "RS" | "RIGHT SIDE" => Ok(Position::Opposite),
            "MIDDLE" | "MB" | "MIDDLE BLOCKER" => Ok(Position::Middle),
            "SETTER" | "S" => Ok(Position::Setter),
            "LIBERO" | "L" => Ok(Position::Libero),
            "DS" | "DEFENSIVE SPECIALIST" => Ok(Position::DefensiveSpecialist),
            _ => Err(VolleyError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
