//! Output type for bootstrap estimation.

/// Lower, median and upper quantile estimates aligned to the requested
/// exceedance probabilities.
#[derive(Debug, Clone)]
pub struct CiBounds {
    lower: Vec<f64>,
    median: Vec<f64>,
    upper: Vec<f64>,
    n_success: usize,
    n_failed: usize,
}

impl CiBounds {
    pub(crate) fn new(
        lower: Vec<f64>,
        median: Vec<f64>,
        upper: Vec<f64>,
            n_success: usize,
        n_failed: usize,
    ) -> Self {
        Self {
            lower,
            median,
            upper,
            n_success,
            n_failed,
        }
    }

    /// Lower percentile per probability.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// 50th percentile per probability.
    pub fn median(&self) -> &[f64] {
        &self.median
    }

    /// Upper percentile per probability.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Number of resamples that contributed to the bounds.
    pub fn n_success(&self) -> usize {
        self.n_success
    }

    /// Number of resamples discarded because their fit failed.
    pub fn n_failed(&self) -> usize {
        self.n_failed
    }

    /// Number of probability positions.
    pub fn len(&self) -> usize {
        self.median.len()
    }

    /// Returns `true` when no probabilities were evaluated.
    pub fn is_empty(&self) -> bool {
        self.median.is_empty()
    }
}
