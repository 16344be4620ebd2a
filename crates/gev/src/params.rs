//! GEV distribution parameters and distribution functions.

/// Below this absolute shape the Gumbel limit formulas are used.
pub(crate) const GUMBEL_EPS: f64 = 1e-8;

/// Validated parameters of a generalized extreme value distribution.
///
/// `F(x) = exp(-(1 + shape * (x - location) / scale)^(-1 / shape))`
///
/// - `shape > 0`: heavy upper tail (Fréchet type)
/// - `shape = 0`: Gumbel
/// - `shape < 0`: bounded upper tail (reversed Weibull type)
///
/// `scale` is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GevParams {
    shape: f64,
    location: f64,
    scale: f64,
}

impl GevParams {
    /// Creates parameters after checking all three are finite and `scale > 0`.
    pub fn new(shape: f64, location: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && location.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self {
                shape,
                location,
                scale,
            })
        } else {
            None
        }
    }

    /// Shape parameter (xi).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Location parameter (mu).
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter (sigma).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn is_gumbel(&self) -> bool {
        self.shape.abs() < GUMBEL_EPS
    }

    /// `t(x)^(-1/xi)` (or `exp(-z)` in the Gumbel limit); `None` outside the support.
    fn tail_term(&self, x: f64) -> Option<f64> {
        let z = (x - self.location) / self.scale;
        if self.is_gumbel() {
            return Some((-z).exp());
        }
        let t = 1.0 + self.shape * z;
        if t <= 0.0 {
            None
        } else {
            Some(t.powf(-1.0 / self.shape))
        }
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        match self.tail_term(x) {
            Some(w) => (-w).exp(),
            // Below the lower endpoint when shape > 0, above the upper one when shape < 0.
            None if self.shape > 0.0 => 0.0,
            None => 1.0,
        }
    }

    /// Survival function `1 - cdf(x)`, evaluated without cancellation.
    pub fn sf(&self, x: f64) -> f64 {
        match self.tail_term(x) {
            Some(w) => -(-w).exp_m1(),
            None if self.shape > 0.0 => 1.0,
            None => 0.0,
        }
    }

    /// Inverse survival function: the depth exceeded with probability `p`.
    ///
    /// Returns `NaN` when `p` is outside `[0, 1]`.
    pub fn isf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        // y = -ln(1 - p)
        let y = -(-p).ln_1p();
        if self.is_gumbel() {
            self.location - self.scale * y.ln()
        } else {
            self.location + self.scale * (y.powf(-self.shape) - 1.0) / self.shape
        }
    }

    /// Inverse survival function at each probability, in the given order.
    pub fn quantiles(&self, probabilities: &[f64]) -> Vec<f64> {
        probabilities.iter().map(|&p| self.isf(p)).collect()
    }

    /// Depth with a return period of `years` (exceedance probability `1 / years`).
    pub fn return_level(&self, years: f64) -> f64 {
        self.isf(1.0 / years)
    }

    /// Log density; `-inf` outside the support.
    pub fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        if self.is_gumbel() {
            return -self.scale.ln() - z - (-z).exp();
        }
        let t = 1.0 + self.shape * z;
        if t <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let inv = 1.0 / self.shape;
        -self.scale.ln() - (1.0 + inv) * t.ln() - t.powf(-inv)
    }

    /// Log-likelihood of a sample.
    pub fn log_likelihood(&self, sample: &[f64]) -> f64 {
        sample.iter().map(|&x| self.log_pdf(x)).sum()
    }
}
