pub mod panels;
pub mod plot;
pub mod result;
pub mod table;

use eframe::egui::{self, RichText, Stroke, Ui};

use crate::color::Tone;

/// A full-width coloured box around `text`, like a status banner.
pub fn callout(ui: &mut Ui, tone: Tone, text: impl Into<RichText>) {
    let dark = ui.visuals().dark_mode;
    let text: RichText = text.into();
    egui::Frame::group(ui.style())
        .fill(tone.fill(dark))
        .stroke(Stroke::new(1.0, tone.accent(dark)))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(text.color(tone.accent(dark)));
        });
}
