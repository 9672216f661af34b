use crate::reading::TemperatureReading;
use sysinfo::Components;
use tracing::debug;

/// Sensor labels that identify a CPU package/die temperature.
///
/// Covers Intel coretemp ("Package id 0", "Core 0") and AMD k10temp
/// ("Tctl", "Tdie") naming, plus the generic "cpu" label some platforms use.
const CPU_LABEL_PATTERNS: &[&str] = &["cpu", "package", "core", "tctl", "tdie"];

/// Sensor labels that identify a GPU temperature.
///
/// Covers the nvidia driver ("GPU"), amdgpu ("edge"), and older radeon
/// naming.
const GPU_LABEL_PATTERNS: &[&str] = &["gpu", "nvidia", "amd", "radeon", "edge"];

/// Owns the hardware component handle for the lifetime of the process.
///
/// The component list is enumerated once at startup and refreshed on every
/// tick; hotplugged sensors (eGPUs, USB probes) appear on the next refresh.
pub struct TemperatureProbe {
    components: Components,
}

impl TemperatureProbe {
    /// Open the sensor handle with an immediate enumeration of all
    /// available hardware components.
    pub fn new() -> Self {
        Self {
            components: Components::new_with_refreshed_list(),
        }
    }

    /// Refresh all sensor values and pick out the first CPU-labeled and
    /// first GPU-labeled temperature.
    ///
    /// "First" follows the enumeration order of the underlying hwmon
    /// interface; no aggregation across multiple matching sensors happens.
    /// A matching sensor with no current value yields an absent reading.
    pub fn sample(&mut self) -> TemperatureReading {
        self.components.refresh(true);

        let cpu = self.first_matching(CPU_LABEL_PATTERNS);
        let gpu = self.first_matching(GPU_LABEL_PATTERNS);

        debug!(?cpu, ?gpu, sensors = self.components.iter().count(), "Sensors sampled");

        TemperatureReading::new(cpu, gpu)
    }

    fn first_matching(&self, patterns: &[&str]) -> Option<f32> {
        self.components
            .iter()
            .find(|component| label_matches(component.label(), patterns))
            .and_then(|component| component.temperature())
    }
}

impl Default for TemperatureProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn label_matches(label: &str, patterns: &[&str]) -> bool {
    let label = label.to_lowercase();
    patterns.iter().any(|pattern| label.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;
    use rstest::rstest;

    #[rstest]
    #[case("Package id 0")]
    #[case("Core 0")]
    #[case("Tctl")]
    #[case("Tdie")]
    #[case("cpu_thermal temp1")]
    fn test_cpu_labels_match(#[case] label: &str) {
        assert!(label_matches(label, CPU_LABEL_PATTERNS));
    }

    #[rstest]
    #[case("GPU")]
    #[case("nvidia GPU")]
    #[case("amdgpu edge")]
    #[case("radeon temp1")]
    fn test_gpu_labels_match(#[case] label: &str) {
        assert!(label_matches(label, GPU_LABEL_PATTERNS));
    }

    #[rstest]
    #[case("nvme Composite")]
    #[case("iwlwifi_1 temp")]
    #[case("acpitz temp1")]
    fn test_unrelated_labels_do_not_match_cpu(#[case] label: &str) {
        assert!(!label_matches(label, CPU_LABEL_PATTERNS));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(label_matches("PACKAGE ID 0", CPU_LABEL_PATTERNS));
        assert!(label_matches("Radeon", GPU_LABEL_PATTERNS));
    }
}
