use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Everything the dashboard reads from disk or offers as input limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Serialized regression model.
    pub model_path: PathBuf,
    /// Historical passing grade table.
    pub dataset_path: PathBuf,
    /// Limits for the RATAAN input.
    pub rataan: InputBounds,
    /// Limits for the S.BAKU input.
    pub sbaku: InputBounds,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("passing_grade_model.json"),
            dataset_path: PathBuf::from("passing-grade.csv"),
            rataan: InputBounds::new(0.0, 1000.0, 500.0),
            sbaku: InputBounds::new(0.0, 100.0, 50.0),
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No {} found, using default configuration", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: DashboardConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;

        config.rataan.validate().context("invalid `rataan` bounds")?;
        config.sbaku.validate().context("invalid `sbaku` bounds")?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Numeric input bounds
// ---------------------------------------------------------------------------

/// Closed range plus starting value for a numeric side-panel input.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputBounds {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Round `value` to a whole number and pull it into `[min, max]`.
    /// NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.round().clamp(self.min, self.max)
    }

    fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            anyhow::bail!("bounds must be finite numbers");
        }
        if self.min > self.max {
            anyhow::bail!("min {} is greater than max {}", self.min, self.max);
        }
        if self.default < self.min || self.default > self.max {
            anyhow::bail!(
                "default {} lies outside [{}, {}]",
                self.default,
                self.min,
                self.max
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "passing-grade-config-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_the_dashboard_inputs() {
        let config = DashboardConfig::default();
        assert_eq!(config.rataan, InputBounds::new(0.0, 1000.0, 500.0));
        assert_eq!(config.sbaku, InputBounds::new(0.0, 100.0, 50.0));
        assert_eq!(config.dataset_path, PathBuf::from("passing-grade.csv"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("passing-grade-config-does-not-exist.json");
        let config = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = scratch_file("partial.json", r#"{ "dataset_path": "data/pg.csv" }"#);
        let config = DashboardConfig::load_or_default(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.dataset_path, PathBuf::from("data/pg.csv"));
        assert_eq!(config.model_path, DashboardConfig::default().model_path);
        assert_eq!(config.sbaku, DashboardConfig::default().sbaku);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let path = scratch_file(
            "inverted.json",
            r#"{ "sbaku": { "min": 100, "max": 0, "default": 50 } }"#,
        );
        let result = DashboardConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn clamp_pulls_values_into_range() {
        let bounds = InputBounds::new(0.0, 100.0, 50.0);
        assert_eq!(bounds.clamp(-3.0), 0.0);
        assert_eq!(bounds.clamp(250.0), 100.0);
        assert_eq!(bounds.clamp(42.0), 42.0);
        assert_eq!(bounds.clamp(f64::NAN), 50.0);
    }

    #[test]
    fn clamp_rounds_to_whole_numbers() {
        let bounds = InputBounds::new(0.0, 1000.0, 500.0);
        assert_eq!(bounds.clamp(612.7), 613.0);
        assert_eq!(bounds.clamp(10.25), 10.0);
        assert_eq!(bounds.clamp(999.6), 1000.0);
    }
}
