// Icon rendering configuration
pub const ICON_SIZE: u32 = 32; // Final tray icon size
const RENDER_SCALE: u32 = 4; // Render at 4x for quality
const RENDER_SIZE: u32 = ICON_SIZE * RENDER_SCALE; // 128px
const BAND_HEIGHT: u32 = RENDER_SIZE / 2; // One half-row per device

// Font size for the two-digit row labels (scaled for render resolution)
const LABEL_FONT_SIZE: f32 = 56.0; // 14.0 * 4

// Dark neutral background with warm/cool row colors for CPU/GPU
const BACKGROUND: [u8; 4] = [40, 40, 40, 255];
const CPU_COLOR: [u8; 4] = [255, 165, 0, 255]; // Orange
const GPU_COLOR: [u8; 4] = [0, 255, 255, 255]; // Cyan

/// Measure text dimensions using ab_glyph metrics
/// Returns (width, height)
fn measure_text_bounds(
    text: &str,
    font: &ab_glyph::FontRef,
    scale: ab_glyph::PxScale,
) -> (f32, f32) {
    use ab_glyph::{Font, ScaleFont};

    let scaled_font = font.as_scaled(scale);

    // Calculate text width by summing glyph advances
    let mut width = 0.0;
    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        width += scaled_font.h_advance(glyph_id);
    }

    // Calculate height from font metrics
    let ascent = scaled_font.ascent();
    let descent = scaled_font.descent();
    let height = ascent - descent;

    (width, height)
}

/// Calculate position to center text within one horizontal band of the canvas
fn centered_in_band(text_width: f32, text_height: f32, band_top: u32) -> (i32, i32) {
    // Center horizontally across the full canvas width
    let x = ((RENDER_SIZE as f32 - text_width) / 2.0) as i32;

    // Center vertically within the band
    let y = band_top as i32 + ((BAND_HEIGHT as f32 - text_height) / 2.0) as i32;

    (x, y)
}

fn load_font() -> ab_glyph::FontRef<'static> {
    let font_data = include_bytes!("../fonts/DejaVuSans-Bold.ttf");
    ab_glyph::FontRef::try_from_slice(font_data).expect("Failed to load font")
}

/// Render the dual-row temperature icon: CPU label on the top half, GPU
/// label on the bottom half, on a dark background.
///
/// Rendering happens at 4x resolution and is downscaled with Lanczos3 so the
/// digits stay legible at tray size. Output is a fresh RGBA byte buffer each
/// call; nothing is cached, and identical labels produce identical pixels.
pub fn render_temperature_icon(cpu_label: &str, gpu_label: &str) -> Vec<u8> {
    use ab_glyph::PxScale;
    use image::{Rgba, RgbaImage, imageops};
    use imageproc::drawing::draw_text_mut;

    let mut img = RgbaImage::from_pixel(RENDER_SIZE, RENDER_SIZE, Rgba(BACKGROUND));

    let font = load_font();
    let scale = PxScale::from(LABEL_FONT_SIZE);

    // Top band: CPU
    let (text_width, text_height) = measure_text_bounds(cpu_label, &font, scale);
    let (x, y) = centered_in_band(text_width, text_height, 0);
    draw_text_mut(&mut img, Rgba(CPU_COLOR), x, y, scale, &font, cpu_label);

    // Bottom band: GPU
    let (text_width, text_height) = measure_text_bounds(gpu_label, &font, scale);
    let (x, y) = centered_in_band(text_width, text_height, BAND_HEIGHT);
    draw_text_mut(&mut img, Rgba(GPU_COLOR), x, y, scale, &font, gpu_label);

    // Downscale to final icon size for better quality
    let final_img = imageops::resize(&img, ICON_SIZE, ICON_SIZE, imageops::FilterType::Lanczos3);

    final_img.into_raw()
}

/// Icon shown between startup and the first completed sensor tick.
pub fn render_placeholder_icon() -> Vec<u8> {
    render_temperature_icon("--", "--")
}
