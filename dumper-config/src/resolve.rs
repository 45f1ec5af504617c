use std::path::{Path, PathBuf};

use crate::{ConfigSet, Error, Result, parse_str_with_filename};

/// Extensions treated as "the path already names the config file itself".
const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Compute the configuration file location from an optional override.
///
/// No override means the directory containing the running program. A path
/// that does not end in a YAML extension is treated as a project directory
/// and gets the conventional `config/database.yml` subpath appended.
///
/// `program_dir` is an explicit parameter rather than being read from
/// process state, so the policy is deterministic under test.
pub fn resolve_path(explicit: Option<&Path>, program_dir: &Path) -> PathBuf {
    let base = explicit.unwrap_or(program_dir);
    let is_yaml_file = base
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext));

    if is_yaml_file {
        base.to_path_buf()
    } else {
        base.join("config").join("database.yml")
    }
}

/// Represents a database.yml file with both raw content and parsed
/// environment set.
#[derive(Debug)]
pub struct DatabaseYml {
    path: PathBuf,
    content: String,
    set: ConfigSet,
}

impl DatabaseYml {
    /// Open and parse a database.yml file.
    ///
    /// All-or-nothing: either the whole [`ConfigSet`] is produced or this
    /// fails with [`Error::NotFound`] / [`Error::Parse`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Box::new(Error::NotFound { path }));
        }
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let set = parse_str_with_filename(&content, &filename)?;

        Ok(Self { path, content, set })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed environment set.
    pub fn set(&self) -> &ConfigSet {
        &self.set
    }
}
