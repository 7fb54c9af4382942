//! Volleyball Match Tracker Library
//!
//! Records teams, players and match events (attacks and defensive actions)
//! into a local SQLite file. Court coordinates are kept as compact packed
//! strings: attack lines as `"x0|y0|x1|y1"` and defense locations as
//! `"x|y"`.
//!
//! ## Features
//!
//! - **Coordinate Codec**: Exact, human-readable packing of points and lines
//! - **Schema Provisioning**: Idempotent table creation from an explicit schema
//! - **Parameterized Inserts**: Every value is bound, never spliced into SQL
//! - **Read-back**: Raw rows for ad-hoc queries, typed records with unpacked coordinates
//!
//! ## Quick Start
//!
//! ```rust
//! use volley_tracker::MatchDatabase;
//!
//! # fn example() -> volley_tracker::Result<()> {
//! let mut db = MatchDatabase::new_in_memory()?;
//! db.insert_team("Clarkson")?;
//! db.insert_player("Henry Rausch", 7, "Outside", "Clarkson")?;
//! db.insert_attack(((0.0, 0.0), (9.0, 9.0)), "Kill", "Point", "Henry Rausch")?;
//!
//! let attacks = db.attacks(Some("Henry Rausch"))?;
//! assert_eq!(attacks[0].line.pack(), "0.0|0.0|9.0|9.0");
//! db.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--database` every time:
//! ```bash
//! export VOLLEY_TRACKER_DB=~/volleyball/season.db
//! ```

pub mod cli;
pub mod codec;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::position::Position;
pub use codec::{pack_line, pack_point, unpack_line, unpack_point, Line, Point};
pub use error::{Result, VolleyError};
pub use storage::{MatchDatabase, Schema, TableDefinition};

pub const DATABASE_PATH_ENV_VAR: &str = "VOLLEY_TRACKER_DB";
