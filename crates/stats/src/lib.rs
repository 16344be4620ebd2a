//! Sample statistics shared by the IDF crates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Returns an ascending copy of `data`. NaN values compare as equal.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Linear-interpolation quantile (Hyndman-Fan type 7).
///
/// This is the default of R's `quantile()` and numpy's `percentile()`.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// First three sample L-moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LMoments {
    /// L-location (equal to the sample mean).
    pub l1: f64,
    /// L-scale.
    pub l2: f64,
    /// Third L-moment.
    pub l3: f64,
}

impl LMoments {
    /// L-skewness `l3 / l2`.
    pub fn t3(&self) -> f64 {
        self.l3 / self.l2
    }
}

/// Unbiased sample L-moments from probability-weighted moments.
///
/// **Expects pre-sorted input.** Returns `None` for fewer than 3 values.
pub fn l_moments(sorted: &[f64]) -> Option<LMoments> {
    let n = sorted.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let mut b0 = 0.0;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        let i = i as f64;
        b0 += x;
        b1 += x * i / (nf - 1.0);
        b2 += x * i * (i - 1.0) / ((nf - 1.0) * (nf - 2.0));
    }
    b0 /= nf;
    b1 /= nf;
    b2 /= nf;

    Some(LMoments {
        l1: b0,
        l2: 2.0 * b1 - b0,
        l3: 6.0 * b2 - 6.0 * b1 + b0,
    })
}
