//! Type-safe wrappers and enums for command-line arguments.

pub mod position;
