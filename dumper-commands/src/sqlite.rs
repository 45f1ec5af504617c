//! sqlite3 dump instruction.
//!
//! SQLite dumps are not environment-parameterized: the one supported
//! invocation targets the conventional development database path,
//! independent of configuration, and has no restore counterpart.

/// The fixed sqlite3 dump instruction.
pub fn dump() -> &'static str {
    "sqlite3 db/development.sqlite3 .dump > dump"
}
