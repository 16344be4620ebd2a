use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level run configuration, as read from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Maxima extraction settings.
    #[serde(default)]
    pub extract: ExtractToml,

    /// GEV fitting settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Return period settings.
    #[serde(default)]
    pub curve: CurveToml,

    /// Bootstrap settings; confidence bounds are computed only when present.
    #[serde(default)]
    pub bootstrap: Option<BootstrapToml>,
}

impl RunConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse run configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractToml {
    #[serde(default = "default_durations")]
    pub durations: Vec<u32>,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_hours_per_year")]
    pub hours_per_year: usize,
    #[serde(default)]
    pub sliding_padding: u32,
}

impl Default for ExtractToml {
    fn default() -> Self {
        Self {
            durations: default_durations(),
            strategy: default_strategy(),
            hours_per_year: default_hours_per_year(),
            sliding_padding: 0,
        }
    }
}

fn default_durations() -> Vec<u32> {
    idf_ams::DEFAULT_DURATIONS.to_vec()
}
fn default_strategy() -> String {
    "sliding".to_string()
}
fn default_hours_per_year() -> usize {
    idf_ams::DEFAULT_HOURS_PER_YEAR
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: usize,
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_shape_limit")]
    pub shape_limit: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            min_sample_size: default_min_sample_size(),
            max_iters: default_max_iters(),
            tolerance: default_tolerance(),
            shape_limit: default_shape_limit(),
        }
    }
}

fn default_method() -> String {
    "mle".to_string()
}
fn default_min_sample_size() -> usize {
    2
}
fn default_max_iters() -> u64 {
    1000
}
fn default_tolerance() -> f64 {
    1e-10
}
fn default_shape_limit() -> f64 {
    1.0
}

/// Return periods, given either in years or as exceedance probabilities.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CurveToml {
    #[serde(default)]
    pub return_periods: Option<Vec<f64>>,
    #[serde(default)]
    pub probabilities: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapToml {
    #[serde(default = "default_n_bootstrap")]
    pub n_bootstrap: usize,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    #[serde(default)]
    pub max_failures: Option<usize>,
}

impl Default for BootstrapToml {
    fn default() -> Self {
        Self {
            n_bootstrap: default_n_bootstrap(),
            confidence_level: default_confidence_level(),
            max_failures: None,
        }
    }
}

fn default_n_bootstrap() -> usize {
    100
}
fn default_confidence_level() -> f64 {
    0.9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = RunConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.extract.durations, vec![1, 2, 3, 6, 12, 24, 48, 72]);
        assert_eq!(cfg.extract.strategy, "sliding");
        assert_eq!(cfg.extract.hours_per_year, 8760);
        assert_eq!(cfg.fit.method, "mle");
        assert_eq!(cfg.fit.min_sample_size, 2);
        assert!(cfg.curve.return_periods.is_none());
        assert!(cfg.bootstrap.is_none());
    }

    #[test]
    fn full_document() {
        let cfg = RunConfig::from_toml_str(
            r#"
            seed = 7

            [extract]
            durations = [1, 24]
            strategy = "fixed"
            sliding_padding = 2

            [fit]
            method = "lmoments"
            min_sample_size = 5

            [curve]
            return_periods = [2.0, 100.0]

            [bootstrap]
            n_bootstrap = 500
            confidence_level = 0.95
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.extract.durations, vec![1, 24]);
        assert_eq!(cfg.extract.strategy, "fixed");
        assert_eq!(cfg.extract.sliding_padding, 2);
        assert_eq!(cfg.fit.method, "lmoments");
        assert_eq!(cfg.curve.return_periods, Some(vec![2.0, 100.0]));
        let b = cfg.bootstrap.unwrap();
        assert_eq!(b.n_bootstrap, 500);
        assert_eq!(b.confidence_level, 0.95);
        assert_eq!(b.max_failures, None);
    }

    #[test]
    fn empty_bootstrap_table_uses_defaults() {
        let cfg = RunConfig::from_toml_str("[bootstrap]\n").unwrap();
        let b = cfg.bootstrap.unwrap();
        assert_eq!(b.n_bootstrap, 100);
        assert_eq!(b.confidence_level, 0.9);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(RunConfig::from_toml_str("[extract]\nwindow = 3\n").is_err());
        assert!(RunConfig::from_toml_str("verbose = true\n").is_err());
    }
}
