//! Error types for the idf-gev crate.

/// Error type for all fallible operations in the idf-gev crate.
///
/// Every variant except [`GevError::InvalidMethod`] and
/// [`GevError::InvalidConfig`] describes a fit that could not be produced
/// for one sample; callers decide whether that is fatal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GevError {
    /// Returned when the sample is empty.
    #[error("sample is empty")]
    EmptyData,

    /// Returned when the sample is smaller than the configured minimum.
    #[error("insufficient data: got {n} values, need at least {min}")]
    InsufficientData {
        /// Number of values provided.
        n: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// Returned when the sample contains NaN or infinity.
    #[error("sample contains non-finite values")]
    NonFiniteData,

    /// Returned when every value in the sample is the same.
    #[error("sample is constant (zero variance)")]
    ConstantData,

    /// Returned when the likelihood optimisation does not reach a finite optimum.
    #[error("optimisation failed to converge")]
    OptimizationFailed,

    /// Returned when an estimator yields parameters outside the valid domain.
    #[error("invalid GEV parameters (shape={shape}, location={location}, scale={scale})")]
    InvalidParameters {
        /// Estimated shape.
        shape: f64,
        /// Estimated location.
        location: f64,
        /// Estimated scale.
        scale: f64,
    },

    /// Returned when a fitting method name is not recognised.
    #[error("unknown fit method: {name:?} (expected \"mle\" or \"lmoments\")")]
    InvalidMethod {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
