//! Fixed and sliding window maxima over one year of hourly values.
//!
//! **Not part of the public API.**

/// Prefix sums of one year's values, with missing readings counted as zero,
/// plus prefix counts of non-missing readings.
pub(crate) struct WindowSums {
    sums: Vec<f64>,
    counts: Vec<usize>,
}

impl WindowSums {
    pub(crate) fn new(values: &[f64]) -> Self {
        let mut sums = Vec::with_capacity(values.len() + 1);
        let mut counts = Vec::with_capacity(values.len() + 1);
        sums.push(0.0);
        counts.push(0);
        let mut s = 0.0;
        let mut c = 0;
        for &v in values {
            if !v.is_nan() {
                s += v;
                c += 1;
            }
            sums.push(s);
            counts.push(c);
        }
        Self { sums, counts }
    }

    fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// Sum over `start..start + width` intersected with the available samples.
    ///
    /// `None` when the intersection holds no non-missing reading.
    pub(crate) fn window(&self, start: usize, width: usize) -> Option<f64> {
        let n = self.len();
        if start >= n {
            return None;
        }
        let end = (start + width).min(n);
        if self.counts[end] == self.counts[start] {
            return None;
        }
        Some(self.sums[end] - self.sums[start])
    }

    /// Maximum over disjoint blocks `[j*d, (j+1)*d)`, `j < floor(hours_per_year / d)`.
    pub(crate) fn fixed_max(&self, duration: usize, hours_per_year: usize) -> Option<f64> {
        let n_blocks = hours_per_year / duration;
        (0..n_blocks)
            .filter_map(|j| self.window(j * duration, duration))
            .reduce(f64::max)
    }

    /// Maximum over every start `s < d * floor(hours_per_year / d)` with
    /// windows of `d + padding` samples.
    pub(crate) fn sliding_max(
        &self,
        duration: usize,
        hours_per_year: usize,
        padding: usize,
    ) -> Option<f64> {
        let n_starts = duration * (hours_per_year / duration);
        let width = duration + padding;
        (0..n_starts)
            .filter_map(|s| self.window(s, width))
            .reduce(f64::max)
    }
}
