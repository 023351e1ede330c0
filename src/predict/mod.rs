/// Prediction layer: the model capability, its on-disk artifact, and the
/// trigger → predict → band pipeline.
pub mod artifact;
pub mod band;
pub mod pipeline;

use thiserror::Error;

/// Number of features the model consumes: `[RATAAN, S.BAKU]`.
pub const FEATURE_COUNT: usize = 2;

/// Feature order expected by every model.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["RATAAN", "S.BAKU"];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    #[error("input feature {index} is not a finite number")]
    NonFiniteInput { index: usize },

    #[error("model produced a non-finite value ({0})")]
    NonFiniteOutput(f64),

    /// Failure reported by the model itself, carried as its message.
    /// Only test doubles raise it today.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("{0}")]
    Model(String),
}

/// Anything that can turn `[RATAAN, S.BAKU]` into a passing grade.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: [f64; FEATURE_COUNT]) -> Result<f64, PredictError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::{PredictError, Predictor, FEATURE_COUNT};

    /// Returns a fixed value or a fixed error, whatever the input.
    pub struct MockPredictor(pub Result<f64, PredictError>);

    impl MockPredictor {
        pub fn value(v: f64) -> Self {
            MockPredictor(Ok(v))
        }

        pub fn failing(message: &str) -> Self {
            MockPredictor(Err(PredictError::Model(message.to_string())))
        }
    }

    impl Predictor for MockPredictor {
        fn predict(&self, _features: [f64; FEATURE_COUNT]) -> Result<f64, PredictError> {
            self.0.clone()
        }
    }
}
