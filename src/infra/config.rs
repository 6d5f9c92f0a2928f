use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use config::Config;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::pricing::ShippingPolicy;

#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    pub environment: String,
    pub application: ServerSettings,
    pub checkout: CheckoutSettings,
    pub catalog: CatalogSettings,
    pub sandbox: SandboxSettings,
}

#[derive(Clone, Deserialize, Debug)]
pub struct ServerSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub logs_directory: String,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", &self.host, &self.port)
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct CheckoutSettings {
    pub free_shipping_threshold: Decimal,
    pub flat_shipping_rate: Decimal,
}

impl CheckoutSettings {
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            free_shipping_threshold: self.free_shipping_threshold,
            flat_rate: self.flat_shipping_rate,
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct CatalogSettings {
    /// Relative paths resolve against the directory that holds `config/`.
    pub seed_file: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct SandboxSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub payment_latency_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub order_latency_ms: u64,
}

impl SandboxSettings {
    pub fn payment_latency(&self) -> Duration {
        Duration::from_millis(self.payment_latency_ms)
    }

    pub fn order_latency(&self) -> Duration {
        Duration::from_millis(self.order_latency_ms)
    }
}

fn find_config_dir() -> anyhow::Result<Utf8PathBuf> {
    let current_dir =
        std::env::current_dir().context("Failed to determine the current directory.")?;
    let current_dir =
        Utf8PathBuf::try_from(current_dir).context("Could not convert PathBuf to Utf8PathBuf")?;

    let config_dir = current_dir
        .ancestors()
        .map(|p| p.join("config"))
        .find(|p| {
            let base_path = p.join("base.yaml");
            p.is_dir() && base_path.is_file()
        })
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory!"))?;

    config_dir
        .canonicalize_utf8()
        .with_context(|| format!("Could not canonicalize config directory {config_dir}."))
}

pub fn get_config_settings() -> anyhow::Result<Settings> {
    // Detect the running environment - default to `development` if unspecified.
    let environment: String =
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_owned());
    get_config_settings_for(&environment)
}

/// Loads settings for a named environment, ignoring `APP_ENVIRONMENT`.
pub fn get_config_settings_for(environment: &str) -> anyhow::Result<Settings> {
    let config_directory = find_config_dir()?;

    let base_source = config::File::from(config_directory.join("base").into_std_path_buf())
        .required(true);
    let env_source =
        config::File::from(config_directory.join(environment).into_std_path_buf())
            .required(true);

    // Finally grab any override settings from environment variables
    // (with a prefix of APP and '__' as separator).
    // e.g. `APP_CHECKOUT__FLAT_SHIPPING_RATE=5 would set `Settings.checkout.flat_shipping_rate`
    let overrides_source = config::Environment::with_prefix("app").separator("__");

    let config = Config::builder()
        .add_source(base_source)
        .add_source(env_source)
        .add_source(overrides_source)
        .build()?;

    let mut settings: Settings = config
        .try_deserialize()
        .context("Could not deserialise config settings.")?;

    // The seed file is named relative to the project root that holds `config/`.
    let seed_file = Utf8PathBuf::from(&settings.catalog.seed_file);
    if seed_file.is_relative() {
        if let Some(root) = config_directory.parent() {
            settings.catalog.seed_file = root.join(seed_file).to_string();
        }
    }

    Ok(settings)
}
