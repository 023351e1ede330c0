use eframe::egui::{RichText, Ui};

use super::callout;
use crate::color::Tone;
use crate::predict::pipeline::{PredictionOutcome, PredictionResult, EXPLANATION};
use crate::state::AppState;

/// Render the outcome of the last Predict press, if any.
pub fn prediction_result(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        return;
    };

    match outcome {
        PredictionOutcome::ModelUnavailable => {
            callout(ui, Tone::Error, state.model_unavailable_message());
        }
        PredictionOutcome::Failed(message) => {
            callout(
                ui,
                Tone::Error,
                format!("An error occurred while predicting: {message}"),
            );
        }
        PredictionOutcome::Ready(result) => ready(ui, result),
    }
}

fn ready(ui: &mut Ui, result: &PredictionResult) {
    ui.heading("Prediction Result");
    ui.label(result.headline());
    ui.add_space(4.0);

    callout(
        ui,
        Tone::Success,
        RichText::new(result.formatted_value()).strong().size(22.0),
    );
    ui.add_space(4.0);

    ui.label(EXPLANATION);
    ui.add_space(4.0);

    callout(ui, Tone::from(result.band), result.band.message());
}
