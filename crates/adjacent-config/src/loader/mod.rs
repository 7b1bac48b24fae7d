//! Configuration loader for executable-adjacent files.
//!
//! Responsibilities:
//! - Provide `ConfigLoader`, which reads a handler-named file from the
//!   directory of the running executable.
//! - Define the error types for each pipeline step.
//!
//! Does NOT handle:
//! - Parsing file contents (delegated to `ConfigHandler`).
//! - Search paths or environment-variable overrides.
//!
//! Invariants / Assumptions:
//! - Symlinks in the executable path are resolved before the directory is taken.
//! - The handler's file name is appended without separator normalization.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, LoadedBytes, load};
pub use error::{LoadError, ResolveError, ResolveStage};
