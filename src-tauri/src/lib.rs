pub mod app;
pub mod config;
pub mod error;
pub mod icon;
pub mod polling;
pub mod reading;
pub mod sensors;
pub mod tray;

pub use config::PollerConfig;
pub use error::IndicatorError;
pub use icon::{ICON_SIZE, render_placeholder_icon, render_temperature_icon};
pub use reading::{TOOLTIP_MAX_LEN, TemperatureReading};
pub use sensors::TemperatureProbe;
