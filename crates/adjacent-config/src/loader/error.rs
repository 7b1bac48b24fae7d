//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every step of the load pipeline.
//! - Attach the underlying platform or I/O error as `source`.
//! - Carry handler parse errors through without wrapping their message.
//!
//! Does NOT handle:
//! - Defining parse errors (each `ConfigHandler` brings its own type).
//! - Logging or retrying failures; every error is returned to the caller.
//!
//! Invariants:
//! - Exactly one variant per pipeline step, reported in step order.
//! - `LoadError::Parse` is transparent: `Display` and `source()` are the handler's.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which part of executable resolution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStage {
    /// Asking the platform for the running executable's path.
    Locate,
    /// Resolving symbolic links in that path.
    Canonicalize,
}

impl fmt::Display for ResolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveStage::Locate => f.write_str("cannot locate executable"),
            ResolveStage::Canonicalize => f.write_str("cannot resolve executable symlinks"),
        }
    }
}

/// The running executable's real path could not be determined.
#[derive(Error, Debug)]
#[error("Failed to resolve executable path ({stage}): {source}")]
pub struct ResolveError {
    pub stage: ResolveStage,
    #[source]
    pub source: io::Error,
}

/// Errors that can occur while loading an executable-adjacent config file.
///
/// `E` is the parse error type of the `ConfigHandler` in use.
#[derive(Error, Debug)]
pub enum LoadError<E> {
    #[error(transparent)]
    ExecutableResolution(#[from] ResolveError),

    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(E),
}

impl<E> LoadError<E> {
    /// Returns true if the executable path could not be resolved.
    pub fn is_executable_resolution(&self) -> bool {
        matches!(self, LoadError::ExecutableResolution(_))
    }

    /// Returns true if the config file could not be read.
    pub fn is_file_read(&self) -> bool {
        matches!(self, LoadError::FileRead { .. })
    }

    /// The handler's parse error, if that is what failed.
    pub fn parse_error(&self) -> Option<&E> {
        match self {
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }

    /// Consumes the error and returns the handler's parse error unchanged.
    pub fn into_parse_error(self) -> Option<E> {
        match self {
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
