mod cli;
mod client_error;
mod config;

pub use cli::Cli;
pub use client_error::ClientError;
pub use config::{
    CatalogSettings, CheckoutSettings, SandboxSettings, ServerSettings, Settings,
    get_config_settings, get_config_settings_for,
};
