use serde::Deserialize;

/// One named environment's database access settings, as written in
/// database.yml.
///
/// Every field is optional in the file; absent keys deserialize to empty
/// strings. An empty `database` is not rejected here — it surfaces later as
/// a visibly malformed command for the operator to catch.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Raw adapter identifier, e.g. "postgresql", "mysql2", "sqlite3"
    pub adapter: String,

    /// Database host; defaults to "localhost" at selection time
    pub host: String,

    /// Name of the database/schema to dump
    pub database: String,

    /// Empty means: omit the credential flag from generated commands
    pub username: String,

    /// Empty means: no password prefix in generated commands
    pub password: String,
}

impl EnvironmentConfig {
    /// Apply selection-time defaults. Runs exactly once, from
    /// [`ConfigSet::select`](crate::ConfigSet::select); after that, `host`
    /// is never empty.
    pub(crate) fn with_defaults(mut self) -> Self {
        if self.host.is_empty() {
            self.host = "localhost".to_string();
        }
        self
    }
}
