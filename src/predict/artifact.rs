use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PredictError, Predictor, FEATURE_COUNT, FEATURE_NAMES};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("reading model file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file '{}' is not a usable model: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

impl ArtifactError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArtifactError::NotFound(_))
    }
}

// ---------------------------------------------------------------------------
// On-disk model
// ---------------------------------------------------------------------------

/// Serialized model, tagged by `kind`:
///
/// ```json
/// {
///   "kind": "linear",
///   "coefficients": [0.85, 1.9],
///   "intercept": -12.5,
///   "feature_names": ["RATAAN", "S.BAKU"],
///   "target": "MIN"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
}

/// Ordinary least squares fit over `[RATAAN, S.BAKU]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl LinearModel {
    #[cfg(test)]
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        LinearModel {
            coefficients,
            intercept,
            feature_names: None,
            target: None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("parameters must be finite numbers".into());
        }
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_NAMES) {
                return Err(format!(
                    "expected features {FEATURE_NAMES:?}, artifact was fitted on {names:?}"
                ));
            }
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: [f64; FEATURE_COUNT]) -> Result<f64, PredictError> {
        if let Some(index) = features.iter().position(|f| !f.is_finite()) {
            return Err(PredictError::NonFiniteInput { index });
        }
        let value = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(PredictError::NonFiniteOutput(value))
        }
    }
}

impl ModelArtifact {
    /// Parse and validate an artifact from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let artifact: ModelArtifact = serde_json::from_str(text).map_err(|e| e.to_string())?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            ModelArtifact::Linear(model) => model.validate(),
        }
    }

    /// Hand the model out as a shared, read-only predictor.
    pub fn into_predictor(self) -> Arc<dyn Predictor> {
        match self {
            ModelArtifact::Linear(model) => Arc::new(model),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Deserialize the model at `path`.
pub fn load_model(path: &Path) -> Result<Arc<dyn Predictor>, ArtifactError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::NotFound(path.to_path_buf())
        } else {
            ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let artifact = ModelArtifact::from_json(&text).map_err(|reason| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        reason,
    })?;

    log::info!("Loaded model from {}", path.display());
    log::debug!("Model artifact: {artifact:?}");
    Ok(artifact.into_predictor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("passing-grade-model-{}-{name}", std::process::id()))
    }

    #[test]
    fn linear_prediction() {
        let model = LinearModel::new([0.5, 2.0], 100.0);
        assert_eq!(model.predict([500.0, 50.0]).unwrap(), 450.0);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let model = LinearModel::new([0.5, 2.0], 100.0);
        assert_eq!(
            model.predict([500.0, f64::NAN]),
            Err(PredictError::NonFiniteInput { index: 1 })
        );
    }

    #[test]
    fn overflowing_output_is_rejected() {
        let model = LinearModel::new([f64::MAX, f64::MAX], 0.0);
        assert!(matches!(
            model.predict([10.0, 10.0]),
            Err(PredictError::NonFiniteOutput(_))
        ));
    }

    #[test]
    fn parses_tagged_json() {
        let artifact = ModelArtifact::from_json(
            r#"{"kind":"linear","coefficients":[0.8,1.5],"intercept":3.0,
                "feature_names":["RATAAN","S.BAKU"],"target":"MIN"}"#,
        )
        .unwrap();
        let ModelArtifact::Linear(model) = artifact;
        assert_eq!(model.coefficients, [0.8, 1.5]);
        assert_eq!(model.target.as_deref(), Some("MIN"));
    }

    #[test]
    fn wrong_feature_names_are_rejected() {
        let err = ModelArtifact::from_json(
            r#"{"kind":"linear","coefficients":[1,1],"intercept":0,
                "feature_names":["S.BAKU","RATAAN"]}"#,
        )
        .unwrap_err();
        assert!(err.contains("expected features"));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(ModelArtifact::from_json(r#"{"kind":"forest","trees":[]}"#).is_err());
    }

    #[test]
    fn absent_file_is_not_found() {
        let err = load_model(&scratch_path("absent.json")).err().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn garbage_file_is_corrupt() {
        let path = scratch_path("garbage.json");
        std::fs::write(&path, b"\x80\x04\x95pickle").unwrap();
        let err = load_model(&path).err().unwrap();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ArtifactError::Corrupt { .. } | ArtifactError::Io { .. }));
    }

    #[test]
    fn round_trips_through_disk() {
        let path = scratch_path("ok.json");
        let artifact = ModelArtifact::Linear(LinearModel::new([1.0, 0.0], 10.0));
        std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();
        let model = load_model(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(model.predict([600.0, 7.0]).unwrap(), 610.0);
    }
}
