//! Daemon command: recurring reconcile passes plus the liveness web server.

use std::sync::Arc;
use std::time::Duration;

use miette::{IntoDiagnostic, Result};
use tokio::sync::watch;
use tracing::{error, info};

use socialpilot_drive::DriveClient;
use socialpilot_reconciler::{Reconciler, run_trigger};
use socialpilot_sheet::SheetClient;
use socialpilot_upload::UploadClient;
use socialpilot_web::{AppState, create_router, serve};

/// Immutable process configuration, built once from the CLI/environment and
/// passed into every component. Business logic never reads the environment.
pub struct Config {
    pub spreadsheet_id: String,
    pub sheet_tab: String,
    pub google_token: String,
    pub upload_api_key: String,
    pub upload_user: String,
    pub poll_interval: u64,
    pub port: u16,
}

fn build_reconciler(config: &Config) -> Reconciler<SheetClient, DriveClient, UploadClient> {
    let sheet = SheetClient::new(
        config.spreadsheet_id.clone(),
        config.sheet_tab.clone(),
        config.google_token.clone(),
    );
    let drive = DriveClient::new(config.google_token.clone());
    let upload = UploadClient::new(config.upload_api_key.clone(), config.upload_user.clone());
    Reconciler::new(sheet, drive, upload)
}

/// Run the daemon until ctrl-c.
pub async fn run(config: Config) -> Result<()> {
    info!(
        spreadsheet = %config.spreadsheet_id,
        poll_interval = config.poll_interval,
        "starting socialpilot daemon"
    );

    let reconciler = build_reconciler(&config);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Liveness web server, independent of the trigger loop.
    let state = Arc::new(AppState {
        upload: UploadClient::new(config.upload_api_key.clone(), config.upload_user.clone()),
    });
    let port = config.port;
    let web = tokio::spawn(async move {
        if let Err(e) = serve(create_router(state), port).await {
            error!(error = %e, "web server exited");
        }
    });

    let period = Duration::from_secs(config.poll_interval);
    let trigger = tokio::spawn(async move {
        run_trigger(&reconciler, period, shutdown_rx).await;
    });

    tokio::signal::ctrl_c().await.into_diagnostic()?;
    info!("shutdown requested");

    shutdown_tx.send(true).into_diagnostic()?;
    trigger.await.into_diagnostic()?;
    web.abort();

    info!("daemon stopped");
    Ok(())
}

/// Run one reconcile pass and exit. Manual trigger for operators.
pub async fn run_once(config: Config) -> Result<()> {
    let reconciler = build_reconciler(&config);
    let summary = reconciler
        .run_pass()
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    info!(
        processed = summary.processed,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "pass finished"
    );
    Ok(())
}
