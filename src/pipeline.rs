use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use idf_ams::{AnnualMaxima, HourlySeries};
use idf_curve::{IdfCurves, build_idf, build_idf_from_maxima};

use crate::config::RunConfig;
use crate::convert;

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn report(curves: &IdfCurves) {
    let summary = curves.summary();
    for issue in summary.issues() {
        warn!(%issue, "duration not fully resolved");
    }
    if !summary.coverage_gaps().is_empty() {
        warn!(
            years = ?summary.affected_years(),
            durations = ?summary.affected_durations(),
            "annual maxima with coverage gaps"
        );
    }
}

/// Runs the full pipeline on an hourly series.
pub fn run(series: &HourlySeries, config: &RunConfig) -> Result<IdfCurves> {
    let idf_cfg = convert::build_idf_config(config)?;
    let mut rng = seeded_rng(config.seed);

    info!(
        n = series.len(),
        n_missing = series.n_missing(),
        durations = ?idf_cfg.extract().durations(),
        strategy = %idf_cfg.extract().strategy(),
        ci = idf_cfg.ci().is_enabled(),
        "building IDF curves"
    );
    let curves = build_idf(series, &idf_cfg, &mut rng).context("IDF construction failed")?;
    report(&curves);
    Ok(curves)
}

/// Runs the fitting stages on an existing annual maxima table.
///
/// The `[extract]` table of `config` is validated but not used.
pub fn run_from_maxima(maxima: AnnualMaxima, config: &RunConfig) -> Result<IdfCurves> {
    let idf_cfg = convert::build_idf_config(config)?;
    let mut rng = seeded_rng(config.seed);

    info!(
        n_years = maxima.n_years(),
        durations = ?maxima.durations(),
        ci = idf_cfg.ci().is_enabled(),
        "fitting IDF curves from annual maxima"
    );
    let curves =
        build_idf_from_maxima(maxima, &idf_cfg, &mut rng).context("IDF construction failed")?;
    report(&curves);
    Ok(curves)
}
