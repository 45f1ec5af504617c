// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod adapter;
mod environment;
mod error;
mod resolve;

use std::collections::HashMap;

pub use adapter::AdapterKind;
pub use environment::EnvironmentConfig;
pub use error::{Error, Result};
pub use resolve::{DatabaseYml, resolve_path};
use serde::Deserialize;

/// Parsed contents of a database.yml: environment name → connection
/// settings. Built once per invocation and read-only thereafter.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ConfigSet(HashMap<String, EnvironmentConfig>);

impl ConfigSet {
    /// Environment names defined in the file, sorted.
    pub fn environments(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }

    /// Select one environment's settings, with defaults applied.
    ///
    /// This is the only place defaults are applied; callers always observe
    /// a non-empty `host`.
    pub fn select(&self, name: &str) -> Result<EnvironmentConfig> {
        match self.0.get(name) {
            Some(config) => Ok(config.clone().with_defaults()),
            None => Err(Error::unknown_environment(name, self.environments())),
        }
    }
}

/// Parse a database.yml from a string (uses "database.yml" as default
/// filename for error reporting)
pub fn parse_str(content: &str) -> Result<ConfigSet> {
    parse_str_with_filename(content, "database.yml")
}

/// Parse a database.yml from a string with a custom filename for error
/// reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<ConfigSet> {
    serde_yaml::from_str(content).map_err(|e| Error::parse(e, content, filename))
}
