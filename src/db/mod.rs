//! Database module
//!
//! SQLite connection handling and migrations for measurement history.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
