//! Path helpers for executable-adjacent configuration files.
//!
//! Responsibilities:
//! - Resolve the real (symlink-free) path of the running executable.
//! - Derive the executable's directory using directory-name semantics.
//! - Append a handler-supplied file name to that directory.
//!
//! Does NOT handle:
//! - File I/O beyond the symlink lookup.
//! - Choosing file names (see `handler`).
//!
//! Invariants:
//! - `executable_dir` never ends with a separator unless it is the root.
//! - `join_unnormalized` is plain concatenation; no separator is inserted,
//!   so `"/opt/app/bin"` + `"config.json"` is `"/opt/app/binconfig.json"`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::locator::ExecutableLocator;
use crate::loader::{ResolveError, ResolveStage};

/// Returns the canonical path of the executable reported by `locator`.
///
/// The result is exactly what `std::fs::canonicalize` returns. On Windows
/// that is a verbatim path (`\\?\C:\...`), where `/` is not a separator, so
/// handlers targeting Windows should return names starting with `\\`.
///
/// # Errors
/// Returns [`ResolveError`] tagged with the stage that failed: the locator
/// itself, or symlink resolution (missing file, broken or cyclic link).
pub fn resolve_executable<L: ExecutableLocator + ?Sized>(
    locator: &L,
) -> Result<PathBuf, ResolveError> {
    let located = locator.executable_path().map_err(|source| ResolveError {
        stage: ResolveStage::Locate,
        source,
    })?;

    std::fs::canonicalize(&located).map_err(|source| ResolveError {
        stage: ResolveStage::Canonicalize,
        source,
    })
}

/// Directory portion of `path`.
///
/// Mirrors the usual `dirname` convention: the root stays the root and a
/// bare file name yields `"."`.
pub fn executable_dir(path: &Path) -> OsString {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => OsString::from("."),
        Some(parent) => parent.as_os_str().to_os_string(),
        None => path.as_os_str().to_os_string(),
    }
}

/// Concatenates `dir` and `filename` exactly as given.
pub fn join_unnormalized(dir: impl Into<OsString>, filename: &str) -> PathBuf {
    let mut joined = dir.into();
    joined.push(filename);
    PathBuf::from(joined)
}
