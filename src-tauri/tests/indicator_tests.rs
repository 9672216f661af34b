use assert2::assert;
use hotwatch_tray_lib::{ICON_SIZE, TOOLTIP_MAX_LEN, TemperatureReading, render_temperature_icon};
use rstest::rstest;

#[rstest]
#[case(Some(45.6), Some(62.1), "CPU: 45.6°C, GPU: 62.1°C")]
#[case(Some(45.6), None, "CPU: 45.6°C, GPU: N/A")]
#[case(None, None, "CPU: N/A, GPU: N/A")]
fn test_tooltip_pipeline(#[case] cpu: Option<f32>, #[case] gpu: Option<f32>, #[case] expected: &str) {
    let reading = TemperatureReading::new(cpu, gpu);
    assert!(reading.tooltip() == expected);
}

#[rstest]
#[case(Some(0.0), Some(0.0))]
#[case(Some(-12.5), Some(105.9))]
#[case(Some(f32::MAX), Some(f32::MIN))]
#[case(None, Some(3.4e28))]
#[case(None, None)]
fn test_tooltip_always_fits_platform_limit(#[case] cpu: Option<f32>, #[case] gpu: Option<f32>) {
    let reading = TemperatureReading::new(cpu, gpu);
    assert!(reading.tooltip().len() <= TOOLTIP_MAX_LEN);
}

#[rstest]
#[case(57.9, "57")]
#[case(39.999, "39")]
#[case(-0.5, "0")]
fn test_compact_labels_truncate(#[case] celsius: f32, #[case] expected: &str) {
    let reading = TemperatureReading::new(Some(celsius), Some(celsius));
    assert!(reading.cpu_compact() == expected);
    assert!(reading.gpu_compact() == expected);
}

#[test]
fn test_absent_sides_are_independent() {
    let no_gpu = TemperatureReading::new(Some(45.6), None);
    assert!(no_gpu.cpu_compact() == "45");
    assert!(no_gpu.gpu_compact() == "--");

    let no_cpu = TemperatureReading::new(None, Some(62.1));
    assert!(no_cpu.cpu_compact() == "--");
    assert!(no_cpu.gpu_compact() == "62");
}

#[test]
fn test_reading_to_icon_pipeline_is_deterministic() {
    let reading = TemperatureReading::new(Some(57.9), Some(62.1));

    let first = render_temperature_icon(&reading.cpu_compact(), &reading.gpu_compact());
    let second = render_temperature_icon(&reading.cpu_compact(), &reading.gpu_compact());

    assert!(first == second);
    assert!(first.len() == (ICON_SIZE * ICON_SIZE * 4) as usize);
}

#[test]
fn test_truncated_and_rounded_values_share_an_icon() {
    // 57.9 and 57.1 both truncate to "57" for the compact label, so the
    // rendered icons are identical even though the tooltips differ.
    let hot = TemperatureReading::new(Some(57.9), None);
    let cool = TemperatureReading::new(Some(57.1), None);

    let hot_icon = render_temperature_icon(&hot.cpu_compact(), &hot.gpu_compact());
    let cool_icon = render_temperature_icon(&cool.cpu_compact(), &cool.gpu_compact());

    assert!(hot_icon == cool_icon);
    assert!(hot.tooltip() != cool.tooltip());
}
