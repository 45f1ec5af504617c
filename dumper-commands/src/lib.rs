//! Pure command-text synthesis for dumper.
//!
//! Everything here is deterministic string building: no I/O, no process
//! execution, no clock access. The generated text is advisory, for a human
//! operator to copy into a shell.

mod artifact;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

pub use artifact::artifact_name;
use dumper_config::{AdapterKind, EnvironmentConfig};

/// Rendered command text for one environment: a dump command and, when
/// requested, its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub dump: String,
    pub restore: Option<String>,
}

impl CommandSpec {
    /// Build the command text for `config` under `kind`, using `name` as
    /// the artifact base filename.
    ///
    /// Returns `None` when the adapter is unrecognized. SQLite has no
    /// restore counterpart, so its `restore` stays absent even when
    /// requested.
    pub fn build(
        config: &EnvironmentConfig,
        kind: AdapterKind,
        name: &str,
        with_restore: bool,
    ) -> Option<Self> {
        match kind {
            AdapterKind::Postgres => Some(Self {
                dump: postgres::dump(config, name),
                restore: with_restore.then(|| postgres::restore(config, name)),
            }),
            AdapterKind::MySql => Some(Self {
                dump: mysql::dump(config, name),
                restore: with_restore.then(|| mysql::restore(config, name)),
            }),
            AdapterKind::Sqlite => Some(Self {
                dump: sqlite::dump().to_string(),
                restore: None,
            }),
            AdapterKind::Unknown => None,
        }
    }
}
