//! Command synthesis operation.
//!
//! The business logic for the dumper binary, separated from CLI argument
//! parsing and output rendering.

use std::path::Path;

use chrono::NaiveDate;
use dumper_commands::{CommandSpec, artifact_name};
use dumper_config::{AdapterKind, DatabaseYml, resolve_path};

use crate::report::DumpReport;

/// Resolve configuration and synthesize command text for one environment.
///
/// All fatal errors surface here, before any command text exists; nothing
/// downstream can fail.
pub fn dump(
    explicit_path: Option<&Path>,
    program_dir: &Path,
    environment: &str,
    date: NaiveDate,
    with_restore: bool,
) -> dumper_config::Result<DumpReport> {
    let path = resolve_path(explicit_path, program_dir);
    let yml = DatabaseYml::open(&path)?;
    let config = yml.set().select(environment)?;

    let kind = AdapterKind::classify(&config.adapter);
    let name = artifact_name(yml.path(), environment, date);
    let commands = CommandSpec::build(&config, kind, &name, with_restore);

    Ok(DumpReport {
        adapter: config.adapter,
        commands,
    })
}
