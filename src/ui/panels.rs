use eframe::egui::{self, Color32, DragValue, RichText, TextEdit, Ui};

use crate::config::InputBounds;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – inputs and the Predict button
// ---------------------------------------------------------------------------

/// Render the left input panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Enter values");
    ui.separator();

    let rataan_bounds = state.config.rataan;
    let sbaku_bounds = state.config.sbaku;

    ui.label("RATAAN");
    bounded_input(ui, &mut state.query.rataan, rataan_bounds);
    ui.add_space(4.0);

    ui.label("S.BAKU");
    bounded_input(ui, &mut state.query.sbaku, sbaku_bounds);
    ui.add_space(12.0);

    ui.heading("University and program");
    ui.separator();

    ui.label("PTN");
    ui.add(TextEdit::singleline(&mut state.query.ptn).hint_text("e.g. Universitas Indonesia"));
    ui.add_space(4.0);

    ui.label("Prodi");
    ui.add(TextEdit::singleline(&mut state.query.prodi).hint_text("e.g. Teknik Informatika"));
    ui.add_space(12.0);

    // Clamp after the widgets so typed values never escape the range.
    state.query.clamp(&state.config);

    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new("Predict"))
        .clicked()
    {
        state.trigger_prediction();
    }

    if state.model.is_none() {
        ui.add_space(4.0);
        ui.label(RichText::new("No model loaded").small().color(Color32::GRAY));
    }
}

fn bounded_input(ui: &mut Ui, value: &mut f64, bounds: InputBounds) {
    ui.add(
        DragValue::new(value)
            .range(bounds.min..=bounds.max)
            .speed(1.0)
            .max_decimals(0),
    )
    .on_hover_text(format!("{} – {}", bounds.min, bounds.max));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} dropped",
                ds.len(),
                ds.dropped_count()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(msg);
        }
    });
}
