//! The plug-in contract between the loader and a configuration consumer.
//!
//! Responsibilities:
//! - Map an environment identifier to the file name to read.
//! - Interpret the raw bytes of that file into caller-owned state.
//!
//! Does NOT handle:
//! - Locating the executable or reading the file (see `loader`).
//! - Any particular file format; handlers decide how bytes are parsed.

use std::error::Error;

/// A configuration consumer that knows which file to read and how to parse it.
///
/// The loader calls [`file`](ConfigHandler::file) once, appends the returned
/// name to the executable's directory without inserting a separator, reads
/// that file, and hands the bytes to [`parse`](ConfigHandler::parse).
///
/// # Example
///
/// ```
/// use adjacent_config::ConfigHandler;
///
/// #[derive(Default)]
/// struct PortConfig {
///     port: u16,
/// }
///
/// impl ConfigHandler for PortConfig {
///     type Error = std::num::ParseIntError;
///
///     fn file(&self, environment: &str) -> String {
///         format!("/{environment}.port")
///     }
///
///     fn parse(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
///         self.port = String::from_utf8_lossy(bytes).trim().parse()?;
///         Ok(())
///     }
/// }
/// ```
pub trait ConfigHandler {
    /// Error reported when the file contents are malformed.
    type Error: Error + Send + Sync + 'static;

    /// Returns the file name for `environment`.
    ///
    /// Must be deterministic. The result is used verbatim, so it usually
    /// starts with a path separator (e.g. `"/config.json"`).
    fn file(&self, environment: &str) -> String;

    /// Consumes the full file contents.
    fn parse(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<H: ConfigHandler + ?Sized> ConfigHandler for &mut H {
    type Error = H::Error;

    fn file(&self, environment: &str) -> String {
        (**self).file(environment)
    }

    fn parse(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).parse(bytes)
    }
}
