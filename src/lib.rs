pub mod domain;
pub mod infra;
pub mod subsystems;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::extract::FromRef;
use camino::Utf8Path;
use domain::{
    catalog::Catalog,
    checkout::{
        SandboxOrderService, SandboxPaymentGateway, SharedOrderService, SharedPaymentGateway,
    },
    session::Sessions,
};
use infra::Settings;
use subsystems::WebServer;
use tokio_graceful_shutdown::{IntoSubsystem, SubsystemBuilder, Toplevel};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Settings,
    pub sessions: Sessions,
    pub catalog: Catalog,
    pub payments: SharedPaymentGateway,
    pub orders: SharedOrderService,
}

pub fn build_subsystems(state: AppState) -> Toplevel {
    let webserver = WebServer::new(state);

    // Setup and execute subsystem tree
    Toplevel::new(async |s| {
        s.start(SubsystemBuilder::new(
            "Webserver",
            webserver.into_subsystem(),
        ));
    })
}

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    build_subsystems(state)
        .catch_signals()
        .handle_shutdown_requests(Duration::from_millis(2000))
        .await
        .map_err(Into::into)
}

pub fn configure_tracing(settings: &Settings) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(
        settings.application.logs_directory.clone(),
        "storefront.log",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();
    _guard
}

pub fn construct_app_state(settings: Settings) -> Result<AppState, anyhow::Error> {
    let catalog = Catalog::load(Utf8Path::new(&settings.catalog.seed_file))
        .context("Failed to load the catalog snapshot.")?;
    let payments: SharedPaymentGateway =
        Arc::new(SandboxPaymentGateway::new(settings.sandbox.payment_latency()));
    let orders: SharedOrderService =
        Arc::new(SandboxOrderService::new(settings.sandbox.order_latency()));

    Ok(AppState {
        settings,
        sessions: Sessions::new(),
        catalog,
        payments,
        orders,
    })
}
