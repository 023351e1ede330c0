use crate::config::DashboardConfig;

use super::band::Band;
use super::Predictor;

/// Paragraph shown between the predicted value and the band advice.
pub const EXPLANATION: &str = "This value is the predicted minimum score needed to pass. \
     Prepare well and keep your score above this number to get accepted.";

// ---------------------------------------------------------------------------
// UserQuery – the side-panel inputs
// ---------------------------------------------------------------------------

/// The four side-panel inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub rataan: f64,
    pub sbaku: f64,
    /// University (PTN).
    pub ptn: String,
    /// Study program (Prodi).
    pub prodi: String,
}

impl UserQuery {
    /// Starting inputs: configured defaults and empty labels.
    pub fn from_config(config: &DashboardConfig) -> Self {
        UserQuery {
            rataan: config.rataan.default,
            sbaku: config.sbaku.default,
            ptn: String::new(),
            prodi: String::new(),
        }
    }

    /// Pull both numeric inputs back into their configured ranges.
    pub fn clamp(&mut self, config: &DashboardConfig) {
        self.rataan = config.rataan.clamp(self.rataan);
        self.sbaku = config.sbaku.clamp(self.sbaku);
    }

    fn features(&self) -> [f64; 2] {
        [self.rataan, self.sbaku]
    }
}

// ---------------------------------------------------------------------------
// Outcome of one Predict press
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub value: f64,
    pub band: Band,
    /// Inputs the value was computed from.
    pub query: UserQuery,
}

impl PredictionResult {
    /// The prediction with two decimals.
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// Sentence introducing the value.
    pub fn headline(&self) -> String {
        format!(
            "Predicted passing grade (MIN) for PTN {} and Prodi {} with RATAAN {} and S.BAKU {} is:",
            self.query.ptn, self.query.prodi, self.query.rataan, self.query.sbaku
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// No model was loaded.
    ModelUnavailable,
    /// The model call failed; carries the error text.
    Failed(String),
    Ready(PredictionResult),
}

/// Run one prediction for `query`.
pub fn run_prediction(model: Option<&dyn Predictor>, query: &UserQuery) -> PredictionOutcome {
    let Some(model) = model else {
        log::warn!("Prediction requested but no model is loaded");
        return PredictionOutcome::ModelUnavailable;
    };

    match model.predict(query.features()) {
        Ok(value) if value.is_finite() => {
            let band = Band::classify(value);
            log::info!(
                "Predicted {value:.2} ({band}) for RATAAN {} / S.BAKU {}",
                query.rataan,
                query.sbaku
            );
            PredictionOutcome::Ready(PredictionResult {
                value,
                band,
                query: query.clone(),
            })
        }
        Ok(value) => {
            log::error!("Model returned a non-finite value: {value}");
            PredictionOutcome::Failed(format!("model returned a non-finite value ({value})"))
        }
        Err(e) => {
            log::error!("Prediction failed: {e}");
            PredictionOutcome::Failed(e.to_string())
        }
    }
}
