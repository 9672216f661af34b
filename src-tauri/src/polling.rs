use crate::config::PollerConfig;
use crate::sensors::TemperatureProbe;
use crate::tray::update_tray;
use tauri::AppHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Drive the poll-format-render-update cycle until cancellation.
///
/// This task is the only owner of the sensor handle, so ticks are serialized
/// by construction and no tick can observe the handle mid-teardown. The
/// interval fires immediately on startup, then every `poll_interval`.
pub async fn start_polling(app: AppHandle, cancel_token: CancellationToken) {
    let config = PollerConfig::from_env();
    info!(config = ?config, "Poller initialized");

    let mut probe = TemperatureProbe::new();

    let mut ticker = interval(config.poll_interval);
    // A sensor refresh that overruns the period must not trigger a burst of
    // catch-up ticks afterwards: stale ticks are dropped, not queued.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                info!("Shutdown signal received, stopping polling gracefully");
                break;
            }
            _ = ticker.tick() => {
                // The hwmon refresh is a blocking read; keep it off the
                // async worker threads.
                let reading = tokio::task::block_in_place(|| probe.sample());

                if let Err(e) = update_tray(&app, &reading) {
                    error!("Failed to update tray icon: {}", e);
                }
            }
        }
    }
}
