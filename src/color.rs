use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Trace colours
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Offset so two traces land on blue/orange rather than red/cyan.
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colours for one comparison: the two raw series and their difference.
#[derive(Debug, Clone, Copy)]
pub struct TraceColors {
    pub first: Color32,
    pub second: Color32,
    pub difference: Color32,
}

impl Default for TraceColors {
    fn default() -> Self {
        let palette = generate_palette(2);
        Self {
            // Slightly translucent so overlapping traces stay visible.
            first: palette[0].gamma_multiply(0.7),
            second: palette[1].gamma_multiply(0.7),
            difference: Color32::from_rgb(128, 0, 128),
        }
    }
}
