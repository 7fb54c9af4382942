//! CLI argument definitions and parsing.

pub mod types;

use crate::codec::{Line, Point};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::position::Position;

#[derive(Debug, Parser)]
#[clap(name = "volley-tracker", about = "Volleyball match event recorder")]
pub struct VolleyCli {
    /// Database file (or set `VOLLEY_TRACKER_DB` env var).
    #[clap(long, short, global = true)]
    pub database: Option<PathBuf>,

    /// Log storage activity at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database file and its tables if they do not exist yet
    Init,

    /// Add a team
    AddTeam {
        /// Team name, e.g. "Clarkson".
        name: String,
    },

    /// Add a player to a team
    AddPlayer {
        /// Player name, e.g. "Henry Rausch".
        name: String,

        /// Jersey number.
        #[clap(long, short)]
        number: u32,

        /// Court position: Outside (OH), Opposite (RS), Middle (MB), Setter (S), Libero (L), DS.
        #[clap(long, short)]
        position: Position,

        /// Name of the team the player belongs to.
        #[clap(long, short)]
        team: String,
    },

    /// Record an attack
    AddAttack {
        /// Attack path as `x0|y0|x1|y1`, e.g. `0.0|0.0|9.0|9.0`.
        #[clap(long, short)]
        line: Line,

        /// Attack type, e.g. Kill, Tip, Roll.
        #[clap(long = "type", short = 't')]
        attack_type: String,

        /// Outcome, e.g. Point, Error, Dug.
        #[clap(long, short)]
        result: String,

        /// Attacking player.
        #[clap(long, short)]
        player: String,
    },

    /// Record a defensive action
    AddDefense {
        /// Court location as `x|y`, e.g. `12.5|30.0`.
        #[clap(long, short)]
        location: Point,

        /// Pass/dig quality rating.
        #[clap(long, short)]
        quality: i64,

        /// Defense type, e.g. Dig, Block, Pass.
        #[clap(long = "type", short = 't')]
        defense_type: String,

        /// Defending player.
        #[clap(long, short)]
        player: String,
    },

    /// Run a read-only SQL statement and print the raw rows
    Query {
        /// SQL statement, e.g. "SELECT * FROM player".
        statement: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List teams
    Teams {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List players
    Players {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List attacks with their lines unpacked
    Attacks {
        /// Only attacks by this player.
        #[clap(long, short)]
        player: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List defensive actions with their locations unpacked
    Defenses {
        /// Only defensive actions by this player.
        #[clap(long, short)]
        player: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
