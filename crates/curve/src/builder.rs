//! Per-duration fitting and table assembly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use idf_ams::{AnnualMaxima, HourlySeries, extract_maxima};
use idf_bootstrap::{BootstrapConfig, bootstrap_ci};
use idf_gev::{FitConfig, GevParams, fit_gev};

use crate::config::IdfConfig;
use crate::error::IdfError;
use crate::summary::{DurationIssue, RunSummary};
use crate::table::{CentralEstimate, IdfTable, RowKind};

/// Everything produced by one IDF run.
#[derive(Debug, Clone)]
pub struct IdfCurves {
    maxima: AnnualMaxima,
    fits: Vec<Option<GevParams>>,
    table: IdfTable,
    summary: RunSummary,
}

impl IdfCurves {
    /// The annual maxima the curves were fitted on.
    pub fn maxima(&self) -> &AnnualMaxima {
        &self.maxima
    }

    /// Point fit per duration, aligned to [`IdfTable::durations`].
    pub fn fits(&self) -> &[Option<GevParams>] {
        &self.fits
    }

    /// Point fit for `duration`, if it succeeded.
    pub fn fit(&self, duration: u32) -> Option<&GevParams> {
        let col = self.table.durations().iter().position(|&d| d == duration)?;
        self.fits[col].as_ref()
    }

    /// The depth table.
    pub fn table(&self) -> &IdfTable {
        &self.table
    }

    /// Affected durations and years.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Consumes the result and returns the depth table.
    pub fn into_table(self) -> IdfTable {
        self.table
    }
}

/// Result of fitting one duration.
struct DurationOutcome {
    point: Option<GevParams>,
    central: Option<CentralEstimate>,
    blocks: Vec<(RowKind, Vec<f64>)>,
    issue: Option<DurationIssue>,
}

fn fit_duration(
    duration: u32,
    sample: &[f64],
    probabilities: &[f64],
    fit: &FitConfig,
    bootstrap: Option<&BootstrapConfig>,
    seed: u64,
) -> DurationOutcome {
    let point = match fit_gev(sample, fit) {
        Ok(p) => p,
        Err(error) => {
            warn!(duration, n = sample.len(), %error, "point fit failed");
            return DurationOutcome {
                point: None,
                central: None,
                blocks: Vec::new(),
                issue: Some(DurationIssue::PointFitFailed { duration, error }),
            };
        }
    };
    let central = point.quantiles(probabilities);

    let Some(bootstrap) = bootstrap else {
        debug!(duration, n = sample.len(), "point fit");
        return DurationOutcome {
            point: Some(point),
            central: Some(CentralEstimate::Point),
            blocks: vec![(RowKind::Central, central)],
            issue: None,
        };
    };

    // The observed sample is only validated by the bootstrap, not refitted.
    let mut rng = StdRng::seed_from_u64(seed);
    match bootstrap_ci(sample, probabilities, bootstrap, &mut rng) {
        Ok(ci) => {
            debug!(
                duration,
                n_success = ci.n_success(),
                n_failed = ci.n_failed(),
                "bootstrap bounds"
            );
            DurationOutcome {
                point: Some(point),
                central: Some(CentralEstimate::BootstrapMedian),
                blocks: vec![
                    (RowKind::Lower, ci.lower().to_vec()),
                    (RowKind::Central, ci.median().to_vec()),
                    (RowKind::Upper, ci.upper().to_vec()),
                ],
                issue: None,
            }
        }
        Err(error) => {
            warn!(
                duration,
                %error,
                "confidence bounds failed, keeping point estimate"
            );
            DurationOutcome {
                point: Some(point),
                central: Some(CentralEstimate::Point),
                blocks: vec![(RowKind::Central, central)],
                issue: Some(DurationIssue::CiFailed { duration, error }),
            }
        }
    }
}

/// Builds IDF curves from an hourly series.
///
/// Extracts the annual maxima with the configured strategy and hands them
/// to [`build_idf_from_maxima`].
///
/// # Errors
///
/// Returns [`IdfError`] for an invalid configuration or series. Fitting
/// problems confined to one duration are reported in
/// [`IdfCurves::summary`] instead.
#[tracing::instrument(skip(series, config, rng), fields(n = series.len()))]
pub fn build_idf(
    series: &HourlySeries,
    config: &IdfConfig,
    rng: &mut impl Rng,
) -> Result<IdfCurves, IdfError> {
    config.validate()?;
    let maxima = extract_maxima(series, config.extract())?;
    build_idf_from_maxima(maxima, config, rng)
}

/// Builds IDF curves from an existing annual maxima table.
///
/// Durations come from the table; the extraction part of `config` is not
/// used. Each duration is fitted independently and in parallel with a
/// private RNG seeded from `rng`, so results do not depend on the thread
/// count. In bootstrap mode the central block holds the bootstrap median;
/// when the bounds fail it falls back to the point estimate, as recorded by
/// [`IdfTable::central_estimate`].
///
/// # Errors
///
/// Returns [`IdfError`] for an invalid configuration.
#[tracing::instrument(
    skip(maxima, config, rng),
    fields(
        n_years = maxima.n_years(),
        n_durations = maxima.n_durations(),
        ci = config.ci().is_enabled()
    )
)]
pub fn build_idf_from_maxima(
    maxima: AnnualMaxima,
    config: &IdfConfig,
    rng: &mut impl Rng,
) -> Result<IdfCurves, IdfError> {
    config.validate()?;

    let probabilities = config.return_periods().probabilities();
    let bootstrap = config.bootstrap();
    let durations = maxima.durations().to_vec();
    let seeds: Vec<u64> = durations.iter().map(|_| rng.random()).collect();

    let outcomes: Vec<DurationOutcome> = durations
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(&duration, &seed)| {
            let sample = maxima.sample(duration).unwrap_or_default();
            fit_duration(
                duration,
                &sample,
                &probabilities,
                config.fit(),
                bootstrap.as_ref(),
                seed,
            )
        })
        .collect();

    let mut table = IdfTable::empty(config.return_periods(), &durations, bootstrap.is_some());
    let mut fits = Vec::with_capacity(outcomes.len());
    let mut issues = Vec::new();
    for (col, outcome) in outcomes.into_iter().enumerate() {
        for (kind, values) in &outcome.blocks {
            table.fill_block(col, *kind, values);
        }
        if let Some(estimate) = outcome.central {
            table.set_central(col, estimate);
        }
        fits.push(outcome.point);
        issues.extend(outcome.issue);
    }

    let summary = RunSummary::new(issues, maxima.coverage_gaps());
    info!(
        n_durations = durations.len(),
        n_issues = summary.issues().len(),
        n_gaps = summary.coverage_gaps().len(),
        "IDF table complete"
    );

    Ok(IdfCurves {
        maxima,
        fits,
        table,
        summary,
    })
}
