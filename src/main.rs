use anyhow::Context;
use clap::Parser;
use storefront_core::{
    configure_tracing, construct_app_state,
    infra::{Cli, get_config_settings},
    start_server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        get_config_settings().context("Could not read application configuration.")?;
    cli.apply(&mut settings);

    // _worker_guard is pulled back into the scope of main() to ensure all tracing events get
    // written to the log file when the program terminates, which is done when _worker_guard is
    // dropped.
    let _worker_guard = configure_tracing(&settings);

    let app_state = construct_app_state(settings)?;

    start_server(app_state).await
}
