use std::path::Path;

use chrono::NaiveDate;

/// Derive the base filename for dump artifacts:
/// `<project>_<env prefix>_<YYYYMMDD>`.
///
/// The project name is the grandparent directory of the config file, by the
/// convention that configuration lives at `<root>/config/database.yml`. The
/// environment contributes its first three characters. No collision
/// handling: same-day reruns for the same environment produce the same name
/// and overwrite the prior artifact.
///
/// `date` is a parameter rather than being read from the clock, so naming
/// stays deterministic under test.
pub fn artifact_name(source: &Path, environment: &str, date: NaiveDate) -> String {
    let project = source
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let prefix: String = environment.chars().take(3).collect();
    format!("{}_{}_{}", project, prefix, date.format("%Y%m%d"))
}
