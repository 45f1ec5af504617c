use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for dumper-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no configuration file found at '{path}'")]
    #[diagnostic(
        code(dumper::not_found),
        help(
            "pass '-p <path>' to point at a database.yml, or at a project directory containing config/database.yml"
        )
    )]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(dumper::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse database.yml")]
    #[diagnostic(
        code(dumper::parse_error),
        help("the file must map environment names to their connection settings")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no environment named '{requested}'; use one of: {}", .available.join(", "))]
    #[diagnostic(
        code(dumper::unknown_environment),
        help("environment names are the top-level keys of database.yml")
    )]
    UnknownEnvironment {
        requested: String,
        available: Vec<String>,
    },
}

impl Error {
    /// Create a parse error from a yaml error with source context
    pub fn parse(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from(loc.index()));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an unknown-environment error carrying the valid names, sorted
    pub fn unknown_environment(requested: impl Into<String>, mut available: Vec<String>) -> Box<Self> {
        available.sort();
        Box::new(Error::UnknownEnvironment {
            requested: requested.into(),
            available,
        })
    }
}
