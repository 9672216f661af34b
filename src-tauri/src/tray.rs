use crate::error::IndicatorError;
use crate::icon::{ICON_SIZE, render_temperature_icon};
use crate::reading::TemperatureReading;
use tauri::AppHandle;

/// Identifier of the single tray icon registered at startup.
pub const TRAY_ID: &str = "main";

/// Push one tick's reading to the tray: render the dual-row icon, apply it,
/// then apply the truncated tooltip.
///
/// The icon byte buffer is created fresh per call and handed to Tauri by
/// value, so no handle survives past the update.
pub fn update_tray(app: &AppHandle, reading: &TemperatureReading) -> Result<(), IndicatorError> {
    let tray = app.tray_by_id(TRAY_ID).ok_or(IndicatorError::TrayMissing)?;

    let icon_bytes = render_temperature_icon(&reading.cpu_compact(), &reading.gpu_compact());
    let icon = tauri::image::Image::new_owned(icon_bytes, ICON_SIZE, ICON_SIZE);
    tray.set_icon(Some(icon))?;

    tray.set_tooltip(Some(reading.tooltip()))?;

    Ok(())
}
