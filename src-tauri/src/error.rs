/// Failures on the tray-update path.
///
/// Sensor unavailability is not an error: it degrades to sentinel labels in
/// [`crate::reading::TemperatureReading`]. Only the platform tray surface
/// can actually fail.
#[derive(Debug)]
pub enum IndicatorError {
    /// The tray icon registered at startup is no longer there.
    TrayMissing,
    /// The platform tray API rejected an icon or tooltip update.
    Platform(String),
}

impl std::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorError::TrayMissing => write!(f, "Tray icon not found"),
            IndicatorError::Platform(msg) => write!(f, "Tray update failed: {}", msg),
        }
    }
}

impl std::error::Error for IndicatorError {}

impl From<tauri::Error> for IndicatorError {
    fn from(e: tauri::Error) -> Self {
        IndicatorError::Platform(e.to_string())
    }
}
