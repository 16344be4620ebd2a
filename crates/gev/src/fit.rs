//! GEV parameter estimation.

use statrs::function::gamma::gamma;
use tracing::debug;

use idf_stats::{l_moments, mean, sd, sorted};

use crate::config::{FitConfig, FitMethod};
use crate::error::GevError;
use crate::optimizer;
use crate::params::GevParams;

/// Euler-Mascheroni constant (mean of the standard Gumbel).
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Gumbel estimate by the method of moments.
fn gumbel_moments(mean: f64, sd: f64) -> Option<GevParams> {
    let scale = sd * 6f64.sqrt() / std::f64::consts::PI;
    GevParams::new(0.0, mean - EULER_GAMMA * scale, scale)
}

/// GEV estimate by the method of L-moments (Hosking, 1997 approximation).
///
/// Returns `None` for fewer than 3 values or a degenerate estimate.
pub(crate) fn lmoment_estimate(sample: &[f64]) -> Option<GevParams> {
    let lm = l_moments(&sorted(sample))?;
    if lm.l2.is_nan() || lm.l2 <= 0.0 {
        return None;
    }
    let c = 2.0 / (3.0 + lm.t3()) - 2f64.ln() / 3f64.ln();
    // Hosking's k is the negated shape.
    let k = 7.8590 * c + 2.9554 * c * c;

    if k.abs() < 1e-6 {
        let scale = lm.l2 / 2f64.ln();
        return GevParams::new(0.0, lm.l1 - EULER_GAMMA * scale, scale);
    }

    let g = gamma(1.0 + k);
    let scale = lm.l2 * k / ((1.0 - 2f64.powf(-k)) * g);
    let location = lm.l1 - scale * (1.0 - g) / k;
    GevParams::new(-k, location, scale)
}

/// Checks that `sample` is usable by [`fit_gev`] under `config` without
/// fitting it.
///
/// # Errors
///
/// [`GevError::EmptyData`], [`GevError::NonFiniteData`],
/// [`GevError::InsufficientData`] or [`GevError::ConstantData`], checked in
/// that order.
pub fn validate_sample(sample: &[f64], config: &FitConfig) -> Result<(), GevError> {
    if sample.is_empty() {
        return Err(GevError::EmptyData);
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(GevError::NonFiniteData);
    }
    if sample.len() < config.min_sample_size() {
        return Err(GevError::InsufficientData {
            n: sample.len(),
            min: config.min_sample_size(),
        });
    }
    let scale = mean(sample).abs().max(1.0);
    if sd(sample) <= 1e-12 * scale {
        return Err(GevError::ConstantData);
    }
    Ok(())
}

/// Fits a GEV distribution to a sample of annual maxima.
///
/// With [`FitMethod::Mle`] the sample is standardised, the likelihood is
/// maximised from the L-moment estimate (or a Gumbel moment estimate for
/// fewer than 3 values), and the result is mapped back to data units.
///
/// # Errors
///
/// - [`GevError::InvalidConfig`] for an invalid `config`.
/// - [`GevError::EmptyData`], [`GevError::NonFiniteData`],
///   [`GevError::InsufficientData`] or [`GevError::ConstantData`] for an
///   unusable sample.
/// - [`GevError::OptimizationFailed`] or [`GevError::InvalidParameters`]
///   when no valid estimate is reached.
pub fn fit_gev(sample: &[f64], config: &FitConfig) -> Result<GevParams, GevError> {
    config.validate()?;
    validate_sample(sample, config)?;

    let params = match config.method() {
        FitMethod::LMoments => lmoment_estimate(sample).ok_or(GevError::OptimizationFailed)?,
        FitMethod::Mle => fit_mle(sample, config)?,
    };

    debug!(
        n = sample.len(),
        shape = params.shape(),
        location = params.location(),
        scale = params.scale(),
        "fitted GEV"
    );
    Ok(params)
}

fn fit_mle(sample: &[f64], config: &FitConfig) -> Result<GevParams, GevError> {
    let m = mean(sample);
    let s = sd(sample);
    let z: Vec<f64> = sample.iter().map(|x| (x - m) / s).collect();

    let limit = config.shape_limit();
    let start = lmoment_estimate(&z)
        .and_then(|p| {
            let shape = p.shape().clamp(-0.9 * limit, 0.9 * limit);
            GevParams::new(shape, p.location(), p.scale())
        })
        .filter(|p| p.log_likelihood(&z).is_finite())
        .or_else(|| gumbel_moments(0.0, 1.0))
        .ok_or(GevError::OptimizationFailed)?;

    let fitted =
        optimizer::maximize_likelihood(&z, start, limit, config.tolerance(), config.max_iters())?;

    let location = m + s * fitted.location();
    let scale = s * fitted.scale();
    GevParams::new(fitted.shape(), location, scale).ok_or(GevError::InvalidParameters {
        shape: fitted.shape(),
        location,
        scale,
    })
}
