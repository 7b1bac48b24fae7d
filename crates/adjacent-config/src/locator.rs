//! Where the running executable lives.
//!
//! Responsibilities:
//! - Provide the unresolved path of the running binary.
//! - Allow hosts and tests to substitute a known path.
//!
//! Does NOT handle:
//! - Symlink resolution (see `path::resolve_executable`).
//!
//! Invariants:
//! - Locators never touch the file they point at; resolution happens later.

use std::io;
use std::path::PathBuf;

/// Source of the (possibly symlinked) path of the running program.
pub trait ExecutableLocator {
    fn executable_path(&self) -> io::Result<PathBuf>;
}

/// Asks the platform for the path of the current process image.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentExecutable;

impl ExecutableLocator for CurrentExecutable {
    fn executable_path(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}

/// Reports a fixed path, e.g. the binary a launcher is about to exec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedExecutable(pub PathBuf);

impl FixedExecutable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl ExecutableLocator for FixedExecutable {
    fn executable_path(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

impl<L: ExecutableLocator + ?Sized> ExecutableLocator for &L {
    fn executable_path(&self) -> io::Result<PathBuf> {
        (**self).executable_path()
    }
}
