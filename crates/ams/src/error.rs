//! Error types for the idf-ams crate.

/// Error type for all fallible operations in the idf-ams crate.
///
/// Series problems (empty, unordered, invalid readings, no complete year)
/// and configuration problems (durations, strategy name, year length) are
/// fatal. A (year, duration) cell without a valid window is not an error;
/// it is stored as `None` in [`AnnualMaxima`](crate::AnnualMaxima).
#[derive(Debug, Clone, thiserror::Error)]
pub enum AmsError {
    /// Returned when the series has no samples.
    #[error("precipitation series is empty")]
    EmptySeries,

    /// Returned when timestamps and values differ in length.
    #[error("length mismatch: {timestamps_len} timestamps, {values_len} values")]
    LengthMismatch {
        /// Number of timestamps.
        timestamps_len: usize,
        /// Number of values.
        values_len: usize,
    },

    /// Returned when a timestamp does not strictly follow its predecessor.
    #[error("timestamps are not strictly increasing at index {index}")]
    UnorderedTimestamps {
        /// Index of the offending sample.
        index: usize,
    },

    /// Returned when a reading is negative or infinite.
    #[error("invalid precipitation value {value} at index {index}")]
    InvalidValue {
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when no calendar year holds a full year of samples.
    #[error(
        "no complete year: need {hours_per_year} samples in at least one year, longest year has {longest}"
    )]
    NoCompleteYear {
        /// Configured number of samples in a nominal year.
        hours_per_year: usize,
        /// Sample count of the best-covered year.
        longest: usize,
    },

    /// Returned when the duration list is empty.
    #[error("duration list is empty")]
    EmptyDurations,

    /// Returned when a duration is zero.
    #[error("invalid duration: {duration} (must be positive)")]
    InvalidDuration {
        /// The invalid duration in hours.
        duration: u32,
    },

    /// Returned when a duration appears more than once.
    #[error("duplicate duration: {duration}")]
    DuplicateDuration {
        /// The repeated duration in hours.
        duration: u32,
    },

    /// Returned when a windowing strategy name is not recognised.
    #[error("unknown windowing strategy: {name:?} (expected \"sliding\" or \"fixed\")")]
    InvalidStrategy {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when a maxima table is assembled from inconsistent parts.
    #[error("invalid maxima table: {reason}")]
    InvalidTable {
        /// Description of the problem.
        reason: String,
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
    fn error_empty_series() {
        assert_eq!(
            AmsError::EmptySeries.to_string(),
            "precipitation series is empty"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let e = AmsError::LengthMismatch {
            timestamps_len: 10,
            values_len: 9,
        };
        assert_eq!(e.to_string(), "length mismatch: 10 timestamps, 9 values");
    }

    #[test]
    fn error_unordered() {
        let e = AmsError::UnorderedTimestamps { index: 4 };
        assert_eq!(
            e.to_string(),
            "timestamps are not strictly increasing at index 4"
        );
    }

    #[test]
    fn error_invalid_value() {
        let e = AmsError::InvalidValue {
            index: 3,
            value: -1.5,
        };
        assert_eq!(e.to_string(), "invalid precipitation value -1.5 at index 3");
    }

    #[test]
    fn error_no_complete_year() {
        let e = AmsError::NoCompleteYear {
            hours_per_year: 8760,
            longest: 100,
        };
        assert_eq!(
            e.to_string(),
            "no complete year: need 8760 samples in at least one year, longest year has 100"
        );
    }

    #[test]
    fn error_invalid_strategy() {
        let e = AmsError::InvalidStrategy {
            name: "rolling".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unknown windowing strategy: \"rolling\" (expected \"sliding\" or \"fixed\")"
        );
    }

    #[test]
    fn error_durations() {
        assert_eq!(
            AmsError::EmptyDurations.to_string(),
            "duration list is empty"
        );
        assert_eq!(
            AmsError::InvalidDuration { duration: 0 }.to_string(),
            "invalid duration: 0 (must be positive)"
        );
        assert_eq!(
            AmsError::DuplicateDuration { duration: 24 }.to_string(),
            "duplicate duration: 24"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AmsError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AmsError>();
    }
}
