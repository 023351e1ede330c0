use eframe::egui::{self, ScrollArea, Ui};

use crate::color::Tone;
use crate::state::AppState;
use crate::ui::{callout, panels, plot, result, table};

const DESCRIPTION: &str = "This app predicts the Passing Grade (MIN) from the RATAAN and \
     S.BAKU values. Enter the values in the sidebar, then press Predict.";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PassingGradeApp {
    pub state: AppState,
}

impl PassingGradeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PassingGradeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: inputs ----
        egui::SidePanel::left("input_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dataset, chart, prediction ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    central_panel(ui, &self.state);
                });
        });
    }
}

fn central_panel(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.model_error {
        callout(ui, Tone::Error, err.as_str());
        ui.add_space(8.0);
    }

    ui.heading("Passing Grade Prediction");
    ui.label(DESCRIPTION);
    ui.add_space(12.0);

    // Each section degrades on its own: a missing dataset leaves prediction usable.
    match (&state.dataset, &state.dataset_error) {
        (Some(dataset), _) => {
            ui.heading("Passing Grade Dataset");
            ui.strong("Passing grade data");
            table::dataset_table(ui, dataset);
            ui.add_space(12.0);
            plot::rataan_chart(ui, dataset);
        }
        (None, Some(err)) => callout(ui, Tone::Error, err.as_str()),
        (None, None) => {}
    }

    ui.add_space(12.0);
    result::prediction_result(ui, state);
}
