//! Nonparametric bootstrap of GEV quantiles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, warn};

use idf_gev::{FitConfig, GevError, fit_gev, validate_sample};
use idf_stats::quantile_type7;

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::result::CiBounds;

/// Draws `sample.len()` values from `sample` with replacement.
pub(crate) fn resample_with_replacement(sample: &[f64], rng: &mut impl Rng) -> Vec<f64> {
    let n = sample.len();
    (0..n).map(|_| sample[rng.random_range(0..n)]).collect()
}

fn validate_probabilities(probabilities: &[f64]) -> Result<(), BootstrapError> {
    if probabilities.is_empty() {
        return Err(BootstrapError::EmptyProbabilities);
    }
    if let Some(&p) = probabilities
        .iter()
        .find(|p| !p.is_finite() || **p <= 0.0 || **p >= 1.0)
    {
        return Err(BootstrapError::InvalidProbability { p });
    }
    Ok(())
}

fn fit_resample(
    sample: &[f64],
    probabilities: &[f64],
    fit: &FitConfig,
    seed: u64,
) -> Result<Vec<f64>, GevError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let resample = resample_with_replacement(sample, &mut rng);
    let params = fit_gev(&resample, fit)?;
    let q = params.quantiles(probabilities);
    if q.iter().all(|x| x.is_finite()) {
        Ok(q)
    } else {
        Err(GevError::InvalidParameters {
            shape: params.shape(),
            location: params.location(),
            scale: params.scale(),
        })
    }
}

/// Estimates lower / median / upper quantiles by the nonparametric bootstrap.
///
/// The observed sample is only validated, not fitted; callers that need the
/// point estimate fit it themselves with the same [`FitConfig`].
///
/// Each round draws one seed per missing resample from `rng`, then resamples
/// and refits in parallel. Resamples whose fit fails are discarded and
/// replaced in the next round. Because seeds are drawn sequentially the
/// result depends only on the state of `rng`, not on the thread count.
///
/// Percentiles are taken per probability position with type-7 interpolation
/// at `(1 - level) / 2`, `0.5` and `level + (1 - level) / 2`.
///
/// # Errors
///
/// - [`BootstrapError::InvalidConfig`] or [`BootstrapError::Fit`] for an
///   invalid configuration.
/// - [`BootstrapError::EmptyProbabilities`] or
///   [`BootstrapError::InvalidProbability`] for unusable probabilities.
/// - [`BootstrapError::Fit`] when the observed sample fails
///   [`validate_sample`].
/// - [`BootstrapError::TooManyFailures`] once more than
///   [`BootstrapConfig::max_failures`] resamples have been discarded.
#[tracing::instrument(
    skip(sample, probabilities, config, rng),
    fields(n = sample.len(), n_bootstrap = config.n_bootstrap())
)]
pub fn bootstrap_ci(
    sample: &[f64],
    probabilities: &[f64],
    config: &BootstrapConfig,
    rng: &mut impl Rng,
) -> Result<CiBounds, BootstrapError> {
    config.validate()?;
    validate_probabilities(probabilities)?;
    validate_sample(sample, config.fit_config())?;

    let target = config.n_bootstrap();
    let max_failures = config.max_failures();
    let mut draws: Vec<Vec<f64>> = Vec::with_capacity(target);
    let mut n_failed = 0usize;

    while draws.len() < target {
        let seeds: Vec<u64> = (0..target - draws.len()).map(|_| rng.random()).collect();
        let round: Vec<Result<Vec<f64>, GevError>> = seeds
            .par_iter()
            .map(|&seed| fit_resample(sample, probabilities, config.fit_config(), seed))
            .collect();

        for outcome in round {
            match outcome {
                Ok(q) => draws.push(q),
                Err(e) => {
                    debug!(error = %e, "discarding resample");
                    n_failed += 1;
                }
            }
        }

        if n_failed > max_failures {
            return Err(BootstrapError::TooManyFailures {
                failures: n_failed,
                max_failures,
                successes: draws.len(),
            });
        }
    }

    if n_failed > 0 {
        warn!(
            n_failed,
            n_success = draws.len(),
            "discarded degenerate resamples"
        );
    }

    let (lo_p, hi_p) = config.percentile_bounds();
    let n_probs = probabilities.len();
    let mut lower = Vec::with_capacity(n_probs);
    let mut median = Vec::with_capacity(n_probs);
    let mut upper = Vec::with_capacity(n_probs);
    let mut column = Vec::with_capacity(draws.len());
    for i in 0..n_probs {
        column.clear();
        column.extend(draws.iter().map(|q| q[i]));
        column.sort_by(f64::total_cmp);
        lower.push(quantile_type7(&column, lo_p));
        median.push(quantile_type7(&column, 0.5));
        upper.push(quantile_type7(&column, hi_p));
    }

    Ok(CiBounds::new(lower, median, upper, draws.len(), n_failed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_keeps_length_and_support() {
        let sample = [1.0, 2.0, 3.0, 4.0];
        let mut rng = StdRng::seed_from_u64(42);
        let r = resample_with_replacement(&sample, &mut rng);
        assert_eq!(r.len(), 4);
        assert!(r.iter().all(|x| sample.contains(x)));
    }

    #[test]
    fn resample_is_deterministic() {
        let sample: Vec<f64> = (0..20).map(f64::from).collect();
        let a = resample_with_replacement(&sample, &mut StdRng::seed_from_u64(99));
        let b = resample_with_replacement(&sample, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn probability_validation() {
        assert!(matches!(
            validate_probabilities(&[]),
            Err(BootstrapError::EmptyProbabilities)
        ));
        assert!(matches!(
            validate_probabilities(&[0.5, 1.0]),
            Err(BootstrapError::InvalidProbability { .. })
        ));
        assert!(matches!(
            validate_probabilities(&[0.0]),
            Err(BootstrapError::InvalidProbability { .. })
        ));
        assert!(validate_probabilities(&[0.5, 0.01]).is_ok());
    }

    #[test]
    fn constant_sample_is_rejected_before_resampling() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = bootstrap_ci(&[2.0; 20], &[0.1], &BootstrapConfig::new(), &mut rng);
        assert!(matches!(result, Err(BootstrapError::Fit(GevError::ConstantData))));
    }

    #[test]
    fn invalid_config_is_rejected_before_fitting() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = BootstrapConfig::new().with_confidence_level(1.0);
        assert!(matches!(
            bootstrap_ci(&[], &[0.1], &config, &mut rng),
            Err(BootstrapError::InvalidConfig { .. })
        ));
    }
}
