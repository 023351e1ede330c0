use std::fmt;

/// Predictions below this are [`Band::Low`].
pub const MODERATE_THRESHOLD: f64 = 500.0;
/// Predictions at or above this are [`Band::High`].
pub const HIGH_THRESHOLD: f64 = 750.0;

/// Qualitative reading of a predicted passing grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// `p < 500`: shown as a warning.
    Low,
    /// `500 <= p < 750`: shown as information.
    Moderate,
    /// `p >= 750`: shown as a success.
    High,
}

impl Band {
    pub fn classify(prediction: f64) -> Band {
        if prediction < MODERATE_THRESHOLD {
            Band::Low
        } else if prediction < HIGH_THRESHOLD {
            Band::Moderate
        } else {
            Band::High
        }
    }

    /// Advice shown under the prediction.
    pub fn message(self) -> &'static str {
        match self {
            Band::Low => {
                "This prediction indicates a fairly low minimum passing grade. \
                 Make sure to study harder!"
            }
            Band::Moderate => {
                "This prediction indicates a moderate minimum passing grade. \
                 Keep studying and maintain your performance!"
            }
            Band::High => {
                "This prediction indicates a high minimum passing grade. \
                 Keep up the effort and stay focused!"
            }
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Low => "low",
            Band::Moderate => "moderate",
            Band::High => "high",
        };
        f.write_str(name)
    }
}
