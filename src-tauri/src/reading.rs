/// Maximum tooltip length accepted by the platform tray APIs (Windows caps
/// NOTIFYICONDATA tips at 63 characters; other platforms are more generous).
pub const TOOLTIP_MAX_LEN: usize = 63;

/// One tick's worth of temperature data, in degrees Celsius.
///
/// Either side may be absent: a machine without a discrete GPU reports no
/// GPU sensor, and some sensors expose no current value right after boot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureReading {
    pub cpu: Option<f32>,
    pub gpu: Option<f32>,
}

impl TemperatureReading {
    pub fn new(cpu: Option<f32>, gpu: Option<f32>) -> Self {
        Self { cpu, gpu }
    }

    /// Compact CPU label for the icon's top row: integer degrees or `--`.
    pub fn cpu_compact(&self) -> String {
        compact_label(self.cpu)
    }

    /// Compact GPU label for the icon's bottom row: integer degrees or `--`.
    pub fn gpu_compact(&self) -> String {
        compact_label(self.gpu)
    }

    /// Full tooltip text, CPU phrase then GPU phrase, truncated to
    /// [`TOOLTIP_MAX_LEN`].
    pub fn tooltip(&self) -> String {
        let text = format!(
            "{}, {}",
            tooltip_phrase("CPU", self.cpu),
            tooltip_phrase("GPU", self.gpu)
        );
        truncate_tooltip(text)
    }
}

fn tooltip_phrase(label: &str, value: Option<f32>) -> String {
    match value {
        Some(celsius) => format!("{}: {:.1}°C", label, celsius),
        None => format!("{}: N/A", label),
    }
}

// The compact label truncates toward zero while the tooltip rounds to one
// decimal. The mismatch is intentional and matches the shipped behavior.
fn compact_label(value: Option<f32>) -> String {
    match value {
        Some(celsius) => format!("{}", celsius as i32),
        None => "--".to_string(),
    }
}

/// Truncate to [`TOOLTIP_MAX_LEN`] bytes without splitting a UTF-8 scalar
/// (the degree sign is two bytes).
fn truncate_tooltip(text: String) -> String {
    if text.len() <= TOOLTIP_MAX_LEN {
        return text;
    }

    let mut end = TOOLTIP_MAX_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
