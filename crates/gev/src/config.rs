//! Configuration for GEV fitting.

use std::fmt;
use std::str::FromStr;

use crate::error::GevError;

/// Estimator used to fit GEV parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMethod {
    /// Maximum likelihood (Nelder-Mead), started from the L-moment estimate.
    #[default]
    Mle,
    /// Method of L-moments (Hosking's approximation).
    LMoments,
}

impl FitMethod {
    /// Lower-case name as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mle => "mle",
            Self::LMoments => "lmoments",
        }
    }
}

impl fmt::Display for FitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FitMethod {
    type Err = GevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mle" => Ok(Self::Mle),
            "lmoments" | "l-moments" => Ok(Self::LMoments),
            _ => Err(GevError::InvalidMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for [`fit_gev`](crate::fit_gev).
///
/// # Example
///
/// ```
/// use idf_gev::{FitConfig, FitMethod};
///
/// let config = FitConfig::new()
///     .with_method(FitMethod::Mle)
///     .with_min_sample_size(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    method: FitMethod,
    min_sample_size: usize,
    max_iters: u64,
    tolerance: f64,
    shape_limit: f64,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `method = Mle`, `min_sample_size = 2`, `max_iters = 1000`,
    /// `tolerance = 1e-10`, `shape_limit = 1.0`.
    pub fn new() -> Self {
        Self {
            method: FitMethod::Mle,
            min_sample_size: 2,
            max_iters: 1000,
            tolerance: 1e-10,
            shape_limit: 1.0,
        }
    }

    // --- Builder methods ---

    /// Sets the estimator.
    pub fn with_method(mut self, method: FitMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the minimum number of values a sample must hold.
    pub fn with_min_sample_size(mut self, n: usize) -> Self {
        self.min_sample_size = n;
        self
    }

    /// Sets the Nelder-Mead iteration cap per optimisation pass.
    pub fn with_max_iters(mut self, n: u64) -> Self {
        self.max_iters = n;
        self
    }

    /// Sets the simplex standard-deviation tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Sets the bound on `|shape|` for maximum likelihood.
    pub fn with_shape_limit(mut self, limit: f64) -> Self {
        self.shape_limit = limit;
        self
    }

    // --- Accessors ---

    /// Returns the estimator.
    pub fn method(&self) -> FitMethod {
        self.method
    }

    /// Returns the minimum sample size.
    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }

    /// Returns the iteration cap per optimisation pass.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the simplex tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the bound on `|shape|`.
    pub fn shape_limit(&self) -> f64 {
        self.shape_limit
    }

    /// Validates this configuration.
    ///
    /// `min_sample_size` must be at least 2 (3 for L-moments), `max_iters`
    /// positive, and `tolerance` and `shape_limit` finite and positive.
    pub fn validate(&self) -> Result<(), GevError> {
        let floor = match self.method {
            FitMethod::Mle => 2,
            FitMethod::LMoments => 3,
        };
        if self.min_sample_size < floor {
            return Err(GevError::InvalidConfig {
                reason: format!(
                    "min_sample_size must be >= {floor} for {}, got {}",
                    self.method, self.min_sample_size
                ),
            });
        }
        if self.max_iters == 0 {
            return Err(GevError::InvalidConfig {
                reason: "max_iters must be positive".to_string(),
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(GevError::InvalidConfig {
                reason: format!("tolerance must be finite and > 0, got {}", self.tolerance),
            });
        }
        if !self.shape_limit.is_finite() || self.shape_limit <= 0.0 {
            return Err(GevError::InvalidConfig {
                reason: format!(
                    "shape_limit must be finite and > 0, got {}",
                    self.shape_limit
                ),
            });
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
