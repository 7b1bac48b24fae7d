//! Executable-adjacent configuration loading.
//!
//! This crate finds a configuration file in the directory of the running
//! executable (after resolving symlinks), reads it, and hands the raw bytes
//! to a caller-supplied [`ConfigHandler`]. File formats are entirely up to
//! the handler.
//!
//! ```no_run
//! use adjacent_config::ConfigHandler;
//!
//! #[derive(Default)]
//! struct Settings {
//!     raw: String,
//! }
//!
//! impl ConfigHandler for Settings {
//!     type Error = std::string::FromUtf8Error;
//!
//!     fn file(&self, environment: &str) -> String {
//!         format!("/{environment}.conf")
//!     }
//!
//!     fn parse(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
//!         self.raw = String::from_utf8(bytes.to_vec())?;
//!         Ok(())
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! adjacent_config::load("prod", &mut settings)?;
//! # Ok::<(), adjacent_config::LoadError<std::string::FromUtf8Error>>(())
//! ```

pub mod handler;
mod loader;
pub mod locator;
pub mod path;

pub use handler::ConfigHandler;
pub use loader::{ConfigLoader, LoadError, LoadedBytes, ResolveError, ResolveStage, load};
pub use locator::{CurrentExecutable, ExecutableLocator, FixedExecutable};
