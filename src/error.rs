use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by config loading and link opening.
///
/// Card derivation never fails; bad input there degrades to defaults.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// No per-user config directory on this platform
    #[error("Could not find config directory")]
    NoConfigDir,

    /// Showcase file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `--init` could not create the directory or the file
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Showcase file is not valid TOML for a showcase
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `--init` target already present
    #[error("{0} already exists, not overwriting")]
    AlreadyExists(PathBuf),

    #[error("No link configured")]
    EmptyUrl,

    /// Desktop opener missing, failed, or timed out
    #[error("Could not open link: {0}")]
    Opener(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
