//! Prints the JSON config that sits next to this binary.
//!
//! Usage: `show_config [ENVIRONMENT]` (defaults to `dev`). The file read is
//! `<binary dir>/<ENVIRONMENT>.json`. Set `RUST_LOG=adjacent_config=debug`
//! to see each resolution step.

use adjacent_config::{ConfigHandler, ConfigLoader};
use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Default)]
struct JsonDocument {
    value: serde_json::Value,
}

impl ConfigHandler for JsonDocument {
    type Error = serde_json::Error;

    fn file(&self, environment: &str) -> String {
        format!("{}{environment}.json", std::path::MAIN_SEPARATOR)
    }

    fn parse(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.value = serde_json::from_slice(bytes)?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let environment = std::env::args().nth(1).unwrap_or_else(|| "dev".to_string());
    let loader = ConfigLoader::new();
    let mut document = JsonDocument::default();

    let path = loader
        .config_path(&environment, &document)
        .context("Failed to locate config file")?;
    loader
        .load(&environment, &mut document)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(&document.value)?);
    Ok(())
}
