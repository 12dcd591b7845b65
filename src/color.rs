use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Hue of the heatmap ramp (green, like the player it comes from).
const HEAT_HUE: f32 = 141.0;

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Heatmap ramp: play count → Color32
// ---------------------------------------------------------------------------

/// Light for few plays, dark and saturated for the busiest slot.
pub fn heat_color(plays: u64, max_plays: u64) -> Color32 {
    let t = if max_plays == 0 {
        0.0
    } else {
        (plays as f32 / max_plays as f32).clamp(0.0, 1.0)
    };
    hsl_to_color32(Hsl::new(HEAT_HUE, 0.35 + 0.45 * t, 0.88 - 0.55 * t))
}
