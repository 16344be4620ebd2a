//! Configuration for annual maxima extraction.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AmsError;

/// Durations (hours) used when none are configured.
pub const DEFAULT_DURATIONS: [u32; 8] = [1, 2, 3, 6, 12, 24, 48, 72];

/// Hourly samples in a nominal (non-leap) year.
pub const DEFAULT_HOURS_PER_YEAR: usize = 24 * 365;

/// How aggregation windows are laid over a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowStrategy {
    /// Every start offset in the year is considered.
    #[default]
    Sliding,
    /// Disjoint blocks of `d` hours starting at the first sample of the year.
    Fixed,
}

impl WindowStrategy {
    /// Lower-case name as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sliding => "sliding",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for WindowStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowStrategy {
    type Err = AmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sliding" => Ok(Self::Sliding),
            "fixed" => Ok(Self::Fixed),
            _ => Err(AmsError::InvalidStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Checks that a duration list is non-empty, positive and free of repeats.
pub(crate) fn validate_durations(durations: &[u32]) -> Result<(), AmsError> {
    if durations.is_empty() {
        return Err(AmsError::EmptyDurations);
    }
    let mut seen = BTreeSet::new();
    for &d in durations {
        if d == 0 {
            return Err(AmsError::InvalidDuration { duration: d });
        }
        if !seen.insert(d) {
            return Err(AmsError::DuplicateDuration { duration: d });
        }
    }
    Ok(())
}

/// Configuration for [`extract_maxima`](crate::extract_maxima).
///
/// # Example
///
/// ```
/// use idf_ams::{ExtractConfig, WindowStrategy};
///
/// let config = ExtractConfig::new()
///     .with_durations(vec![1, 6, 24])
///     .with_strategy(WindowStrategy::Fixed);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfig {
    durations: Vec<u32>,
    strategy: WindowStrategy,
    hours_per_year: usize,
    sliding_padding: u32,
}

impl ExtractConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: durations `[1, 2, 3, 6, 12, 24, 48, 72]`,
    /// `strategy = Sliding`, `hours_per_year = 8760`, `sliding_padding = 0`.
    pub fn new() -> Self {
        Self {
            durations: DEFAULT_DURATIONS.to_vec(),
            strategy: WindowStrategy::Sliding,
            hours_per_year: DEFAULT_HOURS_PER_YEAR,
            sliding_padding: 0,
        }
    }

    // --- Builder methods ---

    /// Sets the aggregation durations in hours, in output column order.
    pub fn with_durations(mut self, durations: Vec<u32>) -> Self {
        self.durations = durations;
        self
    }

    /// Sets the windowing strategy.
    pub fn with_strategy(mut self, strategy: WindowStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the nominal number of hourly samples in a year.
    pub fn with_hours_per_year(mut self, n: usize) -> Self {
        self.hours_per_year = n;
        self
    }

    /// Sets the extra hours added to each sliding window.
    ///
    /// A sliding window for duration `d` spans `d + padding` samples.
    /// Use 2 to reproduce the legacy `d + 2` sliding width.
    pub fn with_sliding_padding(mut self, padding: u32) -> Self {
        self.sliding_padding = padding;
        self
    }

    // --- Accessors ---

    /// Returns the aggregation durations in hours.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Returns the windowing strategy.
    pub fn strategy(&self) -> WindowStrategy {
        self.strategy
    }

    /// Returns the nominal number of hourly samples in a year.
    pub fn hours_per_year(&self) -> usize {
        self.hours_per_year
    }

    /// Returns the extra hours added to each sliding window.
    pub fn sliding_padding(&self) -> u32 {
        self.sliding_padding
    }

    /// Validates this configuration.
    ///
    /// Durations must be non-empty, positive and unique, `hours_per_year`
    /// must be positive, and every duration must fit in a year.
    pub fn validate(&self) -> Result<(), AmsError> {
        validate_durations(&self.durations)?;

        if self.hours_per_year == 0 {
            return Err(AmsError::InvalidConfig {
                reason: "hours_per_year must be positive".to_string(),
            });
        }

        if let Some(&d) = self
            .durations
            .iter()
            .find(|&&d| d as usize > self.hours_per_year)
        {
            return Err(AmsError::InvalidConfig {
                reason: format!(
                    "duration {d} exceeds hours_per_year {}",
                    self.hours_per_year
                ),
            });
        }

        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new()
    }
}
