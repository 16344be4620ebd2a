//! Error types for the idf-bootstrap crate.

use idf_gev::GevError;

/// Error type for all fallible operations in the idf-bootstrap crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    /// The fit configuration is invalid or the observed sample is unusable.
    #[error(transparent)]
    Fit(#[from] GevError),

    /// Returned when the probability list is empty.
    #[error("no exceedance probabilities requested")]
    EmptyProbabilities,

    /// Returned when an exceedance probability is outside (0, 1).
    #[error("invalid exceedance probability: {p} (must be in (0, 1))")]
    InvalidProbability {
        /// The offending probability.
        p: f64,
    },

    /// Returned when more resamples failed to fit than allowed.
    #[error(
        "too many failed resamples: {failures} discarded (limit {max_failures}) after {successes} successes"
    )]
    TooManyFailures {
        /// Number of discarded resamples.
        failures: usize,
        /// Configured limit on discarded resamples.
        max_failures: usize,
        /// Successful resamples collected before giving up.
        successes: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_fit_transparent() {
        let err = BootstrapError::from(GevError::EmptyData);
        assert_eq!(err.to_string(), "sample is empty");
    }

    #[test]
    fn error_invalid_probability() {
        let err = BootstrapError::InvalidProbability { p: 1.5 };
        assert_eq!(
            err.to_string(),
            "invalid exceedance probability: 1.5 (must be in (0, 1))"
        );
    }

    #[test]
    fn error_too_many_failures() {
        let err = BootstrapError::TooManyFailures {
            failures: 11,
            max_failures: 10,
            successes: 42,
        };
        assert_eq!(
            err.to_string(),
            "too many failed resamples: 11 discarded (limit 10) after 42 successes"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<BootstrapError>();
    }
}
