//! Hourly precipitation series.

use std::ops::Range;

use chrono::{Datelike, NaiveDateTime};

use crate::error::AmsError;

/// Validated hourly precipitation record.
///
/// Timestamps are strictly increasing. Values are finite and non-negative,
/// or `NaN` for a missing reading (which is not the same as a true zero).
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    timestamps: Vec<NaiveDateTime>,
    values: Vec<f64>,
}

impl HourlySeries {
    /// Builds a series after validating lengths, ordering and readings.
    ///
    /// # Errors
    ///
    /// - [`AmsError::EmptySeries`] if there are no samples.
    /// - [`AmsError::LengthMismatch`] if the two vectors differ in length.
    /// - [`AmsError::UnorderedTimestamps`] on a repeated or decreasing timestamp.
    /// - [`AmsError::InvalidValue`] on a negative or infinite reading.
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self, AmsError> {
        if timestamps.len() != values.len() {
            return Err(AmsError::LengthMismatch {
                timestamps_len: timestamps.len(),
                values_len: values.len(),
            });
        }
        if values.is_empty() {
            return Err(AmsError::EmptySeries);
        }
        if let Some(i) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AmsError::UnorderedTimestamps { index: i + 1 });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| !v.is_nan() && (v.is_infinite() || v < 0.0))
        {
            return Err(AmsError::InvalidValue { index, value });
        }

        Ok(Self { timestamps, values })
    }

    /// Builds a gap-free series of `values.len()` consecutive hours from `start`.
    pub fn hourly_from(start: NaiveDateTime, values: Vec<f64>) -> Result<Self, AmsError> {
        let timestamps = (0..values.len())
            .map(|h| start + chrono::TimeDelta::hours(h as i64))
            .collect();
        Self::new(timestamps, values)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample timestamps.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Sample values (`NaN` = missing).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of missing readings.
    pub fn n_missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Calendar years present in the series with their sample index ranges.
    pub(crate) fn year_spans(&self) -> Vec<(i32, Range<usize>)> {
        let mut spans: Vec<(i32, Range<usize>)> = Vec::new();
        for (i, ts) in self.timestamps.iter().enumerate() {
            let year = ts.year();
            match spans.last_mut() {
                Some((y, range)) if *y == year => range.end = i + 1,
                _ => spans.push((year, i..i + 1)),
            }
        }
        spans
    }
}
