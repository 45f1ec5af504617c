/// Database engine family declared by an environment's adapter string.
///
/// Derived from [`EnvironmentConfig::adapter`](crate::EnvironmentConfig)
/// on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    Postgres,
    MySql,
    Sqlite,
    Unknown,
}

impl AdapterKind {
    /// Classify an adapter string by case-sensitive substring containment,
    /// checked in priority order: "postgres" wins over "mysql" wins over
    /// "sqlite". Covers the usual spellings ("postgresql", "mysql2",
    /// "sqlite3") without enumerating them.
    pub fn classify(adapter: &str) -> Self {
        if adapter.contains("postgres") {
            AdapterKind::Postgres
        } else if adapter.contains("mysql") {
            AdapterKind::MySql
        } else if adapter.contains("sqlite") {
            AdapterKind::Sqlite
        } else {
            AdapterKind::Unknown
        }
    }
}
