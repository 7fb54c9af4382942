//! Data models for the storage layer

use crate::codec::{Line, Point};
use serde::{Deserialize, Serialize};

/// One row from an ad-hoc query, in column order.
pub type QueryRow = Vec<rusqlite::types::Value>;

/// Team stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
}

/// Player stored in the database, attached to a team by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub number: Option<i64>,
    pub position: Option<String>,
    pub team_name: String,
}

/// An attack with its line already unpacked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub attack_id: i64,
    pub line: Line,
    pub attack_type: String,
    pub result: String,
    pub player_name: String,
}

/// A defensive action with its location already unpacked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defense {
    pub defense_id: i64,
    pub quality: i64,
    pub defense_type: String,
    pub location: Point,
    pub player_name: String,
}
