//! The reader poll loop.
//!
//! One sequential stream of scan events: the loop awaits a tag, hands it
//! to the coordinator, renders the outcome on the LCD, holds it briefly,
//! and returns to polling. A scan is processed end-to-end before the next
//! read starts, so [`ScanCoordinator::handle_scan`] is never re-entered.
//!
//! The loop survives every outcome, including store failures and unknown
//! cards; only reader disconnection or an explicit cancellation stops it.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use pontual_core::TagId;
use pontual_hardware::{HardwareError, LcdDevice, RfidDevice};
use pontual_timeclock::{DisplayMessages, ScanCoordinator};

use crate::error::ControllerError;

/// Run the scan loop until cancelled or the reader disconnects.
///
/// `display_hold` is how long each scan result stays on the LCD before
/// the terminal returns to idle. Cancellation during the hold is honored
/// immediately.
///
/// # Errors
///
/// Returns [`ControllerError::Hardware`] only for LCD failures; reader
/// errors other than disconnection are logged and polling continues.
pub async fn run_scan_loop<R, D>(
    reader: &mut R,
    lcd: &mut D,
    coordinator: &ScanCoordinator,
    shutdown: CancellationToken,
    display_hold: Duration,
) -> Result<(), ControllerError>
where
    R: RfidDevice,
    D: LcdDevice,
{
    lcd.set_backlight(true).await?;
    info!("scan loop started");

    loop {
        let tag_data = tokio::select! {
            _ = shutdown.cancelled() => break,
            result = reader.read_tag() => match result {
                Ok(tag_data) => tag_data,
                Err(HardwareError::Disconnected { .. }) => {
                    warn!("reader disconnected, stopping scan loop");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "tag read failed, continuing to poll");
                    continue;
                }
            },
        };

        let tag = match TagId::new(&tag_data.uid_decimal()) {
            Ok(tag) => tag,
            Err(e) => {
                warn!(error = %e, "unreadable tag identifier");
                lcd.show(DisplayMessages::UNKNOWN_CARD, "").await?;
                continue;
            }
        };

        let outcome = coordinator.handle_scan(&tag, tag_data.timestamp).await;
        let (line1, line2) = outcome.display_lines();
        lcd.show(&line1, &line2).await?;

        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(display_hold) => {}
        }
        lcd.clear().await?;
    }

    lcd.clear().await?;
    lcd.set_backlight(false).await?;
    info!("scan loop stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pontual_hardware::mock::{MockLcd, MockRfid};
    use pontual_storage::Database;
    use pontual_storage::models::Employee;
    use pontual_storage::repositories::{EmployeeRepository, SqliteEmployeeRepository};

    const UID_E1: [u8; 6] = [13, 62, 0, 52, 112, 24]; // "136205211224"

    async fn setup_db_with_employee() -> Database {
        let db = Database::in_memory().await.unwrap();
        let repo = SqliteEmployeeRepository::new(db.pool().clone());
        repo.create(&Employee {
            id: 0,
            matricula: "EMP001".to_string(),
            nome: "Joana Silva".to_string(),
            tag_id: Some("136205211224".to_string()),
            ativo: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn test_loop_processes_scans_until_reader_disconnects() {
        let db = setup_db_with_employee().await;
        let coordinator = ScanCoordinator::new(db.pool().clone());

        let (mut reader, handle) = MockRfid::new();
        let mut lcd = MockLcd::new();

        handle.present_tag(UID_E1.to_vec()).await.unwrap();
        handle.present_tag(UID_E1.to_vec()).await.unwrap();
        handle.present_tag(vec![9, 9, 9, 9]).await.unwrap();
        drop(handle); // closes the channel, ending the loop after the queue drains

        run_scan_loop(
            &mut reader,
            &mut lcd,
            &coordinator,
            CancellationToken::new(),
            Duration::ZERO,
        )
        .await
        .unwrap();

        let frames = lcd.frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], ("Bem-vindo".to_string(), "Joana Silva".to_string()));
        assert_eq!(frames[1], ("Ate logo".to_string(), "Joana Silva".to_string()));
        assert_eq!(frames[2], ("Nao cadastrado".to_string(), String::new()));

        // Loop shut the display down on exit
        assert!(lcd.is_cleared());
        assert!(!lcd.backlight());
    }

    #[tokio::test]
    async fn test_loop_exits_on_cancellation() {
        let db = Database::in_memory().await.unwrap();
        let coordinator = ScanCoordinator::new(db.pool().clone());

        let (mut reader, _handle) = MockRfid::new();
        let mut lcd = MockLcd::new();

        let shutdown = CancellationToken::new();
        shutdown.cancel();

        run_scan_loop(
            &mut reader,
            &mut lcd,
            &coordinator,
            shutdown,
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert!(lcd.frames().is_empty());
        assert!(!lcd.backlight());
    }

    #[tokio::test]
    async fn test_loop_continues_after_unknown_card() {
        let db = setup_db_with_employee().await;
        let coordinator = ScanCoordinator::new(db.pool().clone());

        let (mut reader, handle) = MockRfid::new();
        let mut lcd = MockLcd::new();

        // Unknown card first, then a registered one: the loop keeps going
        handle.present_tag(vec![1, 2, 3, 4]).await.unwrap();
        handle.present_tag(UID_E1.to_vec()).await.unwrap();
        drop(handle);

        run_scan_loop(
            &mut reader,
            &mut lcd,
            &coordinator,
            CancellationToken::new(),
            Duration::ZERO,
        )
        .await
        .unwrap();

        let frames = lcd.frames();
        assert_eq!(frames[0].0, "Nao cadastrado");
        assert_eq!(frames[1].0, "Bem-vindo");
    }
}
