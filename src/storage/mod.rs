//! Storage layer for the volleyball match tracker
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Schema descriptors, database connection and provisioning
//! - `queries`: Inserts and read-back

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{MatchDatabase, Schema, TableDefinition};
