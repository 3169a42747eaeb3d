use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pontual_controller::{ControllerConfig, enroll_tag, run_scan_loop};
use pontual_hardware::mock::{MockLcd, MockRfid};
use pontual_storage::{Database, DatabaseConfig};
use pontual_timeclock::ScanCoordinator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ControllerConfig::from_env().context("invalid configuration")?;

    let db = Database::new(DatabaseConfig::new(&config.database_path))
        .await
        .context("failed to open attendance database")?;

    let coordinator =
        ScanCoordinator::new(db.pool().clone()).with_scan_timeout(config.scan_timeout);

    // Mock devices until a real reader backend is selected via the
    // hardware-* features; the handle must stay alive or the reader
    // reports a disconnect.
    let (mut reader, _handle) = MockRfid::new();
    let mut lcd = MockLcd::new();

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            signal_token.cancel();
        }
    });

    info!(
        version = pontual_core::VERSION,
        database = %config.database_path,
        "pontual controller started"
    );

    // Enrollment mode: attach the next presented tag to an employee and
    // exit, instead of entering the scan loop.
    if let Ok(matricula) = std::env::var("PONTUAL_ENROLL_MATRICULA") {
        let tag = enroll_tag(&mut reader, coordinator.resolver(), &matricula, &shutdown).await?;
        info!(matricula = %matricula, tag = %tag, "enrollment complete");
        db.close().await;
        return Ok(());
    }

    run_scan_loop(
        &mut reader,
        &mut lcd,
        &coordinator,
        shutdown,
        config.display_hold,
    )
    .await?;

    db.close().await;
    Ok(())
}
