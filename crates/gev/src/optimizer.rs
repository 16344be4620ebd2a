//! Nelder-Mead optimizer for GEV maximum-likelihood estimation.
//!
//! Wraps the `argmin` crate to minimize the mean negative log-likelihood
//! over `(shape, location, ln scale)` of a standardised sample. A pass that
//! stops on the iteration cap instead of the simplex tolerance is a failed
//! fit.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;

use crate::error::GevError;
use crate::params::GevParams;

/// Initial simplex edge length along each coordinate.
const SIMPLEX_STEP: f64 = 0.1;

/// Cost function for argmin: negative log-likelihood per observation.
struct GevCost<'a> {
    data: &'a [f64],
    shape_limit: f64,
}

impl GevCost<'_> {
    fn nll(&self, params: &[f64]) -> f64 {
        let (shape, location, ln_scale) = (params[0], params[1], params[2]);
        if shape.abs() >= self.shape_limit {
            return f64::MAX;
        }
        match GevParams::new(shape, location, ln_scale.exp()) {
            Some(p) => {
                let ll = p.log_likelihood(self.data);
                if ll.is_finite() {
                    -ll / self.data.len() as f64
                } else {
                    f64::MAX
                }
            }
            None => f64::MAX,
        }
    }
}

impl CostFunction for GevCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        Ok(self.nll(params))
    }
}

fn simplex_around(start: &[f64]) -> Vec<Vec<f64>> {
    let mut simplex = Vec::with_capacity(start.len() + 1);
    simplex.push(start.to_vec());
    for i in 0..start.len() {
        let mut vertex = start.to_vec();
        vertex[i] += SIMPLEX_STEP;
        simplex.push(vertex);
    }
    simplex
}

fn run_pass(
    cost: GevCost<'_>,
    start: &[f64],
    tolerance: f64,
    max_iters: u64,
) -> Result<Vec<f64>, GevError> {
    let solver = NelderMead::new(simplex_around(start))
        .with_sd_tolerance(tolerance)
        .map_err(|_| GevError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(max_iters))
        .run()
        .map_err(|_| GevError::OptimizationFailed)?;

    let state = result.state();
    if !converged(state.get_termination_status()) {
        return Err(GevError::OptimizationFailed);
    }
    state.best_param.clone().ok_or(GevError::OptimizationFailed)
}

fn converged(status: &TerminationStatus) -> bool {
    matches!(
        status,
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
    )
}

/// Maximises the GEV likelihood of `data` starting from `start`.
///
/// `data` should be standardised (zero mean, unit variance) so the fixed
/// simplex step suits every sample. Two passes are run, the second
/// restarting from the best vertex of the first; both must meet
/// `tolerance` within `max_iters` iterations.
pub(crate) fn maximize_likelihood(
    data: &[f64],
    start: GevParams,
    shape_limit: f64,
    tolerance: f64,
    max_iters: u64,
) -> Result<GevParams, GevError> {
    let x0 = [start.shape(), start.location(), start.scale().ln()];

    let first = run_pass(GevCost { data, shape_limit }, &x0, tolerance, max_iters)?;
    let best = run_pass(GevCost { data, shape_limit }, &first, tolerance, max_iters)?;

    let nll = GevCost { data, shape_limit }.nll(&best);
    if !nll.is_finite() || nll >= f64::MAX {
        return Err(GevError::OptimizationFailed);
    }

    GevParams::new(best[0], best[1], best[2].exp()).ok_or(GevError::InvalidParameters {
        shape: best[0],
        location: best[1],
        scale: best[2].exp(),
    })
}
