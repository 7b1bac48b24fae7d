//! The `ConfigLoader` pipeline.
//!
//! Responsibilities:
//! - Ask the handler for a file name, resolve the executable, derive the
//!   config path, read it, and pass the bytes to the handler.
//! - Expose the intermediate steps (`config_path`, `read`) for hosts that
//!   want the path or the raw bytes.
//!
//! Does NOT handle:
//! - Search paths, environment overrides, or caching.
//! - Interpreting bytes (delegated to `ConfigHandler::parse`).
//!
//! Invariants / Assumptions:
//! - Every call re-resolves the executable and re-reads the file.
//! - Steps run in order; the first failure ends the call.
//! - `parse` is never called unless the file was read in full.

use std::path::PathBuf;

use crate::handler::ConfigHandler;
use crate::locator::{CurrentExecutable, ExecutableLocator};
use crate::path::{executable_dir, join_unnormalized, resolve_executable};

use super::error::{LoadError, ResolveError};

/// Raw contents of a config file together with where they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBytes {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Loads configuration files that live next to the running executable.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<L = CurrentExecutable> {
    locator: L,
}

impl ConfigLoader {
    /// Create a loader for the current process's executable.
    pub fn new() -> Self {
        Self {
            locator: CurrentExecutable,
        }
    }
}

impl<L: ExecutableLocator> ConfigLoader<L> {
    /// Use a different source for the executable path.
    pub fn with_locator<M: ExecutableLocator>(self, locator: M) -> ConfigLoader<M> {
        ConfigLoader { locator }
    }

    /// The locator this loader asks for the executable path.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Computes the config path for `environment` without reading it.
    ///
    /// The handler's file name is appended to the executable's directory
    /// verbatim. A name without a leading separator therefore lands in the
    /// parent directory under a merged name (`bin` + `app.json` is `binapp.json`).
    ///
    /// # Errors
    /// Returns [`ResolveError`] if the executable path cannot be resolved.
    pub fn config_path<H: ConfigHandler>(
        &self,
        environment: &str,
        handler: &H,
    ) -> Result<PathBuf, ResolveError> {
        let filename = handler.file(environment);
        tracing::debug!(environment, filename = %filename, "Selected config file name");

        let executable = resolve_executable(&self.locator)?;
        let path = join_unnormalized(executable_dir(&executable), &filename);
        tracing::debug!(
            executable = %executable.display(),
            path = %path.display(),
            "Derived config path from executable"
        );

        Ok(path)
    }

    /// Reads the config file for `environment` without parsing it.
    ///
    /// # Errors
    /// Returns `ExecutableResolution` or `FileRead`; never `Parse`.
    pub fn read<H: ConfigHandler>(
        &self,
        environment: &str,
        handler: &H,
    ) -> Result<LoadedBytes, LoadError<H::Error>> {
        let path = self.config_path(environment, handler)?;

        let bytes = std::fs::read(&path).map_err(|source| LoadError::FileRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Config file read");

        Ok(LoadedBytes { path, bytes })
    }

    /// Reads the config file for `environment` and hands it to `handler`.
    ///
    /// # Errors
    /// - `ExecutableResolution` if the executable or its real path is unknown.
    /// - `FileRead` if the derived path cannot be read.
    /// - `Parse` carrying the handler's own error, unchanged.
    pub fn load<H: ConfigHandler>(
        &self,
        environment: &str,
        mut handler: H,
    ) -> Result<(), LoadError<H::Error>> {
        let LoadedBytes { bytes, .. } = self.read(environment, &handler)?;
        handler.parse(&bytes).map_err(LoadError::Parse)
    }
}

/// Loads `environment`'s config file from beside the current executable.
///
/// Shorthand for `ConfigLoader::new().load(environment, handler)`.
pub fn load<H: ConfigHandler>(environment: &str, handler: H) -> Result<(), LoadError<H::Error>> {
    ConfigLoader::new().load(environment, handler)
}
