use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::PassingGradeDataset;

const ROW_HEIGHT: f32 = 18.0;

/// Scrollable table of the cleaned dataset, index column first.
pub fn dataset_table(ui: &mut Ui, dataset: &PassingGradeDataset) {
    ui.push_id("dataset_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .max_scroll_height(260.0)
            .column(Column::auto())
            .columns(Column::auto().at_least(60.0), dataset.column_names.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("index");
                });
                for name in &dataset.column_names {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, dataset.rows.len(), |mut row| {
                    let record = &dataset.rows[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(record.index.to_string());
                    });
                    for cell in &record.cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
