use camino::Utf8PathBuf;
use clap::Parser;

use super::Settings;

/// Storefront session server: cart, stock and checkout state for the storefront UI.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Listen on this port instead of the configured one.
    #[arg(long)]
    pub port: Option<u16>,

    /// Load the catalog snapshot from this JSON file instead of the configured one.
    #[arg(long)]
    pub catalog: Option<Utf8PathBuf>,
}

impl Cli {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(port) = self.port {
            settings.application.port = port;
        }
        if let Some(catalog) = &self.catalog {
            settings.catalog.seed_file = catalog.to_string();
        }
    }
}
