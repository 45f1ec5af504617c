use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use eyre::Result;

use crate::{
    ops,
    report::{Report, TerminalOutput},
};

/// Exit code for missing or unparseable configuration, matching clap's
/// usage-error code.
const EXIT_CONFIG: i32 = 2;

/// Extension trait for exiting on configuration errors with pretty
/// formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dumper_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(EXIT_CONFIG);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dumper")]
#[command(version)]
#[command(about = "Print database dump and restore commands for an environment from database.yml")]
pub(crate) struct Cli {
    /// Environment to generate commands for
    #[arg(default_value = "development")]
    pub environment: String,

    /// Path to database.yml, or a project directory containing
    /// config/database.yml (defaults to the directory of this binary)
    #[arg(short = 'p', long = "path")]
    pub path: Option<PathBuf>,

    /// Also print the restore command
    #[arg(short = 'F', long = "restore")]
    pub restore: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let environment = normalize_environment(&self.environment);
        let program_dir = program_dir()?;
        let today = Local::now().date_naive();

        let report = ops::dump(
            self.path.as_deref(),
            &program_dir,
            environment,
            today,
            self.restore,
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

/// A blank environment argument falls back to the development default.
fn normalize_environment(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { "development" } else { trimmed }
}

/// Directory containing the running binary, the anchor for the
/// conventional config location.
fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf())
}
