//! Tunable constants for the layout stages.
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for reading-order reconstruction and line assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side length of the virtual canvas boxes are normalized into
    pub canvas_size: f64,
    /// Median line height assumed when there are no boxes to measure
    pub default_median_height: f64,
    /// Row tolerance as a fraction of the median height
    pub row_tolerance_factor: f64,
    /// Vertical jump, as a fraction of the median height, that starts a new output line
    pub line_break_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1000.0,
            default_median_height: 50.0,
            row_tolerance_factor: 0.5,
            line_break_factor: 0.8,
        }
    }
}

impl LayoutConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read layout config {}", path.as_ref().display()))?;

        let config: LayoutConfig = serde_json::from_str(&contents)
            .context("Failed to parse layout config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values no layout pass can work with.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("canvas_size", self.canvas_size),
            ("default_median_height", self.default_median_height),
            ("row_tolerance_factor", self.row_tolerance_factor),
            ("line_break_factor", self.line_break_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a positive finite number, got {value}");
            }
        }
        Ok(())
    }
}
