//! Tests for the configuration loader pipeline.
//!
//! Responsibilities:
//! - Test successful loads and byte-for-byte delivery to the handler.
//! - Test failure ordering and that `parse` is skipped on read failures.
//! - Test symlink resolution of the executable path.
//!
//! Invariants:
//! - Every test builds its own executable layout inside a `tempfile` directory
//!   and points the loader at it with `FixedExecutable`.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thiserror::Error;

use crate::handler::ConfigHandler;
use crate::locator::FixedExecutable;
use crate::loader::ConfigLoader;


/// A fake install tree: `<tmp>/opt/app/bin/server`.
pub struct Install {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub executable: PathBuf,
}

impl Install {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let bin_dir = root.path().join("opt").join("app").join("bin");
        std::fs::create_dir_all(&bin_dir).unwrap();
        let executable = bin_dir.join("server");
        std::fs::write(&executable, b"#!/bin/true\n").unwrap();
        Self {
            root,
            bin_dir,
            executable,
        }
    }

    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.bin_dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn loader(&self) -> ConfigLoader<FixedExecutable> {
        ConfigLoader::new().with_locator(FixedExecutable::new(&self.executable))
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("rejected {len} bytes")]
pub struct Rejected {
    pub len: usize,
}

/// Maps environments to `/<env>.json` and records what `parse` received.
#[derive(Default)]
pub struct Recording {
    pub calls: Vec<Vec<u8>>,
    pub reject: bool,
}

impl Recording {
    pub fn rejecting() -> Self {
        Self {
            calls: Vec::new(),
            reject: true,
        }
    }
}

impl ConfigHandler for Recording {
    type Error = Rejected;

    fn file(&self, environment: &str) -> String {
        format!("/{environment}.json")
    }

    fn parse(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.calls.push(bytes.to_vec());
        if self.reject {
            return Err(Rejected { len: bytes.len() });
        }
        Ok(())
    }
}

/// Handler that returns a fixed file name regardless of environment.
pub struct Named {
    pub name: String,
    pub calls: usize,
}

impl Named {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: 0,
        }
    }
}

impl ConfigHandler for Named {
    type Error = Rejected;

    fn file(&self, _environment: &str) -> String {
        self.name.clone()
    }

    fn parse(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        self.calls += 1;
        Ok(())
    }
}
