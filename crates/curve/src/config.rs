//! Configuration for IDF table construction.

use idf_ams::ExtractConfig;
use idf_bootstrap::BootstrapConfig;
use idf_gev::FitConfig;

use crate::error::IdfError;
use crate::return_period::ReturnPeriods;

/// Whether confidence bounds are estimated.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CiMode {
    /// Point estimates only.
    #[default]
    None,
    /// Lower / median / upper bounds by the nonparametric bootstrap.
    Bootstrap(BootstrapConfig),
}

impl CiMode {
    /// Returns `true` for [`CiMode::Bootstrap`].
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Bootstrap(_))
    }
}

/// Configuration for [`build_idf`](crate::build_idf).
///
/// The fitting configuration applies to both the point fits and every
/// bootstrap resample; the one carried inside a [`BootstrapConfig`] is
/// replaced by it.
///
/// # Example
///
/// ```
/// use idf_bootstrap::BootstrapConfig;
/// use idf_curve::{CiMode, IdfConfig};
///
/// let config = IdfConfig::new()
///     .with_ci(CiMode::Bootstrap(BootstrapConfig::new().with_n_bootstrap(200)));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IdfConfig {
    extract: ExtractConfig,
    fit: FitConfig,
    return_periods: ReturnPeriods,
    ci: CiMode,
}

impl IdfConfig {
    /// Creates a new configuration with every component at its default.
    pub fn new() -> Self {
        Self {
            extract: ExtractConfig::new(),
            fit: FitConfig::new(),
            return_periods: ReturnPeriods::new(),
            ci: CiMode::None,
        }
    }

    // --- Builder methods ---

    /// Sets the maxima extraction configuration.
    pub fn with_extract(mut self, extract: ExtractConfig) -> Self {
        self.extract = extract;
        self
    }

    /// Sets the fitting configuration.
    pub fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    /// Sets the return periods.
    pub fn with_return_periods(mut self, return_periods: ReturnPeriods) -> Self {
        self.return_periods = return_periods;
        self
    }

    /// Sets the confidence interval mode.
    pub fn with_ci(mut self, ci: CiMode) -> Self {
        self.ci = ci;
        self
    }

    // --- Accessors ---

    /// Returns the maxima extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the fitting configuration.
    pub fn fit(&self) -> &FitConfig {
        &self.fit
    }

    /// Returns the return periods.
    pub fn return_periods(&self) -> &ReturnPeriods {
        &self.return_periods
    }

    /// Returns the confidence interval mode.
    pub fn ci(&self) -> &CiMode {
        &self.ci
    }

    /// Bootstrap configuration with this configuration's fit settings, if enabled.
    pub(crate) fn bootstrap(&self) -> Option<BootstrapConfig> {
        match &self.ci {
            CiMode::None => None,
            CiMode::Bootstrap(b) => Some(b.clone().with_fit_config(self.fit.clone())),
        }
    }

    /// Validates every component.
    pub fn validate(&self) -> Result<(), IdfError> {
        self.extract.validate()?;
        self.fit.validate()?;
        if self.return_periods.is_empty() {
            return Err(IdfError::EmptyReturnPeriods);
        }
        if let Some(b) = self.bootstrap() {
            b.validate()?;
        }
        Ok(())
    }
}

impl Default for IdfConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = IdfConfig::new();
        assert!(!c.ci().is_enabled());
        assert_eq!(c.return_periods().len(), 7);
        assert_eq!(c.extract().durations().len(), 8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn bootstrap_inherits_fit_config() {
        let fit = FitConfig::new().with_min_sample_size(10);
        let c = IdfConfig::new()
            .with_fit(fit.clone())
            .with_ci(CiMode::Bootstrap(BootstrapConfig::new()));
        assert_eq!(c.bootstrap().unwrap().fit_config(), &fit);
    }

    #[test]
    fn invalid_bootstrap_config_is_reported() {
        let c = IdfConfig::new().with_ci(CiMode::Bootstrap(
            BootstrapConfig::new().with_confidence_level(1.5),
        ));
        assert!(matches!(c.validate(), Err(IdfError::Bootstrap(_))));
    }

    #[test]
    fn invalid_extract_config_is_reported() {
        let c = IdfConfig::new().with_extract(ExtractConfig::new().with_durations(vec![]));
        assert!(matches!(c.validate(), Err(IdfError::Ams(_))));
    }
}
