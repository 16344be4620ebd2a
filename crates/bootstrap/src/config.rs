//! Configuration for bootstrap confidence intervals.

use idf_gev::FitConfig;

use crate::error::BootstrapError;

/// Configuration for [`bootstrap_ci`](crate::bootstrap_ci).
///
/// # Example
///
/// ```
/// use idf_bootstrap::BootstrapConfig;
///
/// let config = BootstrapConfig::new()
///     .with_n_bootstrap(500)
///     .with_confidence_level(0.95);
/// let (lower, upper) = config.percentile_bounds();
/// assert!((lower - 0.025).abs() < 1e-12);
/// assert!((upper - 0.975).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BootstrapConfig {
    n_bootstrap: usize,
    confidence_level: f64,
    max_failures: Option<usize>,
    fit: FitConfig,
}

impl BootstrapConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `n_bootstrap = 100`, `confidence_level = 0.9`,
    /// `max_failures = n_bootstrap`, default [`FitConfig`].
    pub fn new() -> Self {
        Self {
            n_bootstrap: 100,
            confidence_level: 0.9,
            max_failures: None,
            fit: FitConfig::new(),
        }
    }

    // --- Builder methods ---

    /// Sets the number of successful resamples to collect.
    pub fn with_n_bootstrap(mut self, n: usize) -> Self {
        self.n_bootstrap = n;
        self
    }

    /// Sets the two-sided confidence level, in (0, 1).
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Sets how many resamples may fail to fit before the estimate fails.
    pub fn with_max_failures(mut self, n: usize) -> Self {
        self.max_failures = Some(n);
        self
    }

    /// Sets the fitting configuration used for every resample.
    pub fn with_fit_config(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    // --- Accessors ---

    /// Returns the number of successful resamples to collect.
    pub fn n_bootstrap(&self) -> usize {
        self.n_bootstrap
    }

    /// Returns the confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the failure limit (defaults to `n_bootstrap`).
    pub fn max_failures(&self) -> usize {
        self.max_failures.unwrap_or(self.n_bootstrap)
    }

    /// Returns the fitting configuration.
    pub fn fit_config(&self) -> &FitConfig {
        &self.fit
    }

    /// Lower and upper percentile levels as fractions:
    /// `(1 - level) / 2` and `level + (1 - level) / 2`.
    pub fn percentile_bounds(&self) -> (f64, f64) {
        let tail = (1.0 - self.confidence_level) / 2.0;
        (tail, self.confidence_level + tail)
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.n_bootstrap == 0 {
            return Err(BootstrapError::InvalidConfig {
                reason: "n_bootstrap must be positive".to_string(),
            });
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(BootstrapError::InvalidConfig {
                reason: format!(
                    "confidence_level must be in (0, 1), got {}",
                    self.confidence_level
                ),
            });
        }
        self.fit.validate()?;
        Ok(())
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new()
    }
}
