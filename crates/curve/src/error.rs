//! Error types for the idf-curve crate.

use idf_ams::AmsError;
use idf_bootstrap::BootstrapError;
use idf_gev::GevError;

/// Error type for all fallible operations in the idf-curve crate.
///
/// Per-duration fitting failures are not errors here: they are recorded in
/// the [`RunSummary`](crate::RunSummary) and leave missing cells.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdfError {
    /// Extraction or series validation failed.
    #[error(transparent)]
    Ams(#[from] AmsError),

    /// Invalid fitting configuration.
    #[error(transparent)]
    Gev(#[from] GevError),

    /// Invalid bootstrap configuration.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// Returned when no return periods are configured.
    #[error("return period set is empty")]
    EmptyReturnPeriods,

    /// Returned when an exceedance probability is outside (0, 1).
    #[error("invalid exceedance probability: {p} (must be in (0, 1))")]
    InvalidProbability {
        /// The offending probability.
        p: f64,
    },

    /// Returned when a return period is not finite or not above one year.
    #[error("invalid return period: {years} years (must be > 1)")]
    InvalidReturnPeriod {
        /// The offending return period.
        years: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
