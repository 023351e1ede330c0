use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::predict::band::Band;

// ---------------------------------------------------------------------------
// HSL → Color32
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees) to an egui colour.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Message tones: error / warning / info / success callouts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Warning,
    Info,
    Success,
}

impl From<Band> for Tone {
    fn from(band: Band) -> Self {
        match band {
            Band::Low => Tone::Warning,
            Band::Moderate => Tone::Info,
            Band::High => Tone::Success,
        }
    }
}

impl Tone {
    fn hue(self) -> f32 {
        match self {
            Tone::Error => 0.0,
            Tone::Warning => 40.0,
            Tone::Info => 210.0,
            Tone::Success => 130.0,
        }
    }

    /// Callout background.
    pub fn fill(self, dark_mode: bool) -> Color32 {
        let lightness = if dark_mode { 0.18 } else { 0.92 };
        hsl_color(self.hue(), 0.55, lightness)
    }

    /// Callout text and border.
    pub fn accent(self, dark_mode: bool) -> Color32 {
        let lightness = if dark_mode { 0.72 } else { 0.30 };
        hsl_color(self.hue(), 0.70, lightness)
    }
}
