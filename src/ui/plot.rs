use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::Tone;
use crate::data::model::PassingGradeDataset;

// ---------------------------------------------------------------------------
// RATAAN line chart
// ---------------------------------------------------------------------------

/// Line chart of RATAAN against the row index, with a hover tooltip.
pub fn rataan_chart(ui: &mut Ui, dataset: &PassingGradeDataset) {
    ui.strong("Change in RATAAN values");

    if dataset.is_empty() {
        ui.label("No complete rows to plot.");
        return;
    }

    let color = Tone::Info.accent(ui.visuals().dark_mode);
    let series = dataset.rataan_series();

    Plot::new("rataan_chart")
        .height(280.0)
        .x_axis_label("Index")
        .y_axis_label("RATAAN")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .label_formatter(|_name, value| {
            format!("index: {:.0}\nRATAAN: {:.2}", value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(series.clone()))
                .name("RATAAN")
                .color(color)
                .width(1.5);
            plot_ui.line(line);

            plot_ui.points(
                Points::new(PlotPoints::from(series))
                    .color(color)
                    .radius(2.0),
            );
        });
}
