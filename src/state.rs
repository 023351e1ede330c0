use std::fmt::Display;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::DashboardConfig;
use crate::data::loader::{load_dataset, DatasetError};
use crate::data::model::PassingGradeDataset;
use crate::predict::artifact::{load_model, ArtifactError};
use crate::predict::pipeline::{run_prediction, PredictionOutcome, UserQuery};
use crate::predict::Predictor;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded model (None if the artifact could not be loaded).
    pub model: Option<Arc<dyn Predictor>>,

    /// Cleaned dataset (None if the CSV could not be loaded).
    pub dataset: Option<PassingGradeDataset>,

    /// User-visible reason the model is missing.
    pub model_error: Option<String>,

    /// User-visible reason the dataset is missing.
    pub dataset_error: Option<String>,

    /// Current side-panel inputs.
    pub query: UserQuery,

    /// Result of the last Predict press (None while idle).
    pub outcome: Option<PredictionOutcome>,

    /// Status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load model and dataset for a new session.
    ///
    /// Absent files and dataset content problems are reported in the UI.
    /// A model or CSV that cannot be deserialized at all is returned to the
    /// caller.
    pub fn startup(config: DashboardConfig) -> Result<Self> {
        let (model, model_error) = recover(load_model(&config.model_path), LoadPolicy::Startup)
            .context("loading model")?;

        let (dataset, dataset_error) =
            recover(load_dataset(&config.dataset_path), LoadPolicy::Startup)
                .context("loading dataset")?;

        Ok(Self::from_parts(config, model, model_error, dataset, dataset_error))
    }

    /// Build a session from already loaded parts.
    pub fn from_parts(
        config: DashboardConfig,
        model: Option<Arc<dyn Predictor>>,
        model_error: Option<String>,
        dataset: Option<PassingGradeDataset>,
        dataset_error: Option<String>,
    ) -> Self {
        let query = UserQuery::from_config(&config);
        Self {
            config,
            model,
            dataset,
            model_error,
            dataset_error,
            query,
            outcome: None,
            status_message: None,
        }
    }

    /// Re-read model and dataset from disk, replacing both.
    ///
    /// Every failure is reported in the UI; the side-panel inputs survive.
    pub fn reload(&mut self) {
        let (model, model_error) = match recover(
            load_model(&self.config.model_path),
            LoadPolicy::Everything,
        ) {
            Ok(slot) => slot,
            Err(e) => (None, Some(e.to_string())),
        };
        let (dataset, dataset_error) = match recover(
            load_dataset(&self.config.dataset_path),
            LoadPolicy::Everything,
        ) {
            Ok(slot) => slot,
            Err(e) => (None, Some(e.to_string())),
        };

        self.model = model;
        self.model_error = model_error;
        self.dataset = dataset;
        self.dataset_error = dataset_error;
        self.outcome = None;
        self.status_message = Some(match (&self.model, &self.dataset) {
            (Some(_), Some(_)) => "Reloaded model and dataset".to_string(),
            _ => "Reload finished with errors".to_string(),
        });
        log::info!("Session reloaded");
    }

    /// Handle a Predict press.
    pub fn trigger_prediction(&mut self) {
        self.query.clamp(&self.config);
        let outcome = run_prediction(self.model.as_deref(), &self.query);
        self.outcome = Some(outcome);
    }

    /// Error shown when Predict is pressed without a model.
    pub fn model_unavailable_message(&self) -> String {
        format!(
            "Model unavailable. Make sure '{}' was loaded successfully.",
            self.config.model_path.display()
        )
    }
}

// ---------------------------------------------------------------------------
// Loader error recovery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadPolicy {
    /// Recover from absent files and bad table contents.
    Startup,
    /// Recover from any failure.
    Everything,
}

/// How a loader error should be treated when a session is built.
trait LoadFailure: Display {
    fn is_not_found(&self) -> bool;

    /// The file was read but its contents are unusable for one section only.
    fn is_content_error(&self) -> bool;
}

impl LoadFailure for ArtifactError {
    fn is_not_found(&self) -> bool {
        ArtifactError::is_not_found(self)
    }

    fn is_content_error(&self) -> bool {
        false
    }
}

impl LoadFailure for DatasetError {
    fn is_not_found(&self) -> bool {
        DatasetError::is_not_found(self)
    }

    fn is_content_error(&self) -> bool {
        matches!(
            self,
            DatasetError::MissingColumn(_) | DatasetError::InvalidNumber { .. }
        )
    }
}

/// Turn a loader result into `(value, user-visible error)`, or hand back
/// errors the policy does not recover from.
fn recover<T, E: LoadFailure>(
    result: std::result::Result<T, E>,
    policy: LoadPolicy,
) -> std::result::Result<(Option<T>, Option<String>), E> {
    match result {
        Ok(value) => Ok((Some(value), None)),
        Err(e) if e.is_not_found() => {
            log::error!("{e}");
            Ok((None, Some(format!("{e}. Make sure the file exists."))))
        }
        Err(e) if e.is_content_error() || policy == LoadPolicy::Everything => {
            log::error!("{e}");
            Ok((None, Some(e.to_string())))
        }
        Err(e) => Err(e),
    }
}
