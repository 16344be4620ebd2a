//! # idf-ams
//!
//! Annual maximum series (AMS) extraction from hourly precipitation.
//!
//! Each calendar year is scanned independently. For every configured
//! duration `d` the year's hourly values are aggregated over windows of
//! `d` hours and the largest window sum is kept.
//!
//! ## Windowing
//!
//! ```mermaid
//! graph LR
//!     A["HourlySeries"] -->|"split by calendar year"| B["year slices"]
//!     B -->|"Fixed: disjoint blocks"| C["block sums"]
//!     B -->|"Sliding: every start offset"| C
//!     C -->|"max over valid windows"| D["AnnualMaxima"]
//! ```
//!
//! - **Fixed**: `floor(hours_per_year / d)` disjoint blocks from the first
//!   sample of the year.
//! - **Sliding**: every start offset below `d * floor(hours_per_year / d)`.
//!   For non-negative input the sliding maximum is never below the fixed one.
//!
//! Missing readings (`NaN`) add nothing to a window sum. A window made only
//! of missing readings is skipped, and a year with no valid window for a
//! duration yields a `None` cell (a coverage gap) rather than a zero.
//! Windows running past the end of a year's data are truncated to the
//! available samples.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use idf_ams::{ExtractConfig, HourlySeries, WindowStrategy, extract_maxima};
//!
//! let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let series = HourlySeries::hourly_from(start, vec![0.0; 8760])?;
//! let config = ExtractConfig::new().with_strategy(WindowStrategy::Fixed);
//! let ams = extract_maxima(&series, &config)?;
//! # Ok::<(), idf_ams::AmsError>(())
//! ```

mod config;
mod error;
mod series;
mod table;
pub(crate) mod window;

pub use config::{DEFAULT_DURATIONS, DEFAULT_HOURS_PER_YEAR, ExtractConfig, WindowStrategy};
pub use error::AmsError;
pub use series::HourlySeries;
pub use table::{AnnualMaxima, CoverageGap};

use tracing::{debug, warn};

use crate::window::WindowSums;

/// Extracts the annual maxima table from an hourly series.
///
/// # Errors
///
/// Returns [`AmsError`] for an invalid configuration or when no calendar
/// year holds `hours_per_year` samples. Years lacking a valid window for
/// a duration are reported through [`AnnualMaxima::coverage_gaps`].
#[tracing::instrument(
    skip(series, config),
    fields(n = series.len(), strategy = %config.strategy())
)]
pub fn extract_maxima(
    series: &HourlySeries,
    config: &ExtractConfig,
) -> Result<AnnualMaxima, AmsError> {
    config.validate()?;

    let spans = series.year_spans();
    let longest = spans.iter().map(|(_, r)| r.len()).max().unwrap_or(0);
    if longest < config.hours_per_year() {
        return Err(AmsError::NoCompleteYear {
            hours_per_year: config.hours_per_year(),
            longest,
        });
    }

    let hours_per_year = config.hours_per_year();
    let padding = config.sliding_padding() as usize;
    let mut years = Vec::with_capacity(spans.len());
    let mut values = Vec::with_capacity(spans.len() * config.durations().len());

    for (year, range) in spans {
        let sums = WindowSums::new(&series.values()[range.clone()]);
        for &d in config.durations() {
            let d = d as usize;
            let max = match config.strategy() {
                WindowStrategy::Fixed => sums.fixed_max(d, hours_per_year),
                WindowStrategy::Sliding => sums.sliding_max(d, hours_per_year, padding),
            };
            if max.is_none() {
                debug!(year, duration = d, n = range.len(), "no valid window");
            }
            values.push(max);
        }
        years.push(year);
    }

    let table = AnnualMaxima::new(
        years,
        config.durations().to_vec(),
        values,
        Some(config.strategy()),
    );

    let n_gaps = table.coverage_gaps().len();
    if n_gaps > 0 {
        warn!(n_gaps, "annual maxima table has coverage gaps");
    }
    debug!(n_years = table.n_years(), "extracted annual maxima");

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn start(year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn rejects_series_without_complete_year() {
        let series = HourlySeries::hourly_from(start(2001), vec![1.0; 100]).unwrap();
        let r = extract_maxima(&series, &ExtractConfig::new());
        assert!(matches!(
            r,
            Err(AmsError::NoCompleteYear {
                hours_per_year: 8760,
                longest: 100
            })
        ));
    }

    #[test]
    fn rejects_invalid_config_before_scanning() {
        let series = HourlySeries::hourly_from(start(2001), vec![1.0; 10]).unwrap();
        let config = ExtractConfig::new().with_durations(vec![]);
        assert!(matches!(
            extract_maxima(&series, &config),
            Err(AmsError::EmptyDurations)
        ));
    }

    #[test]
    fn one_row_per_year_one_column_per_duration() {
        // 2001 is complete (8760 h); 2002 holds only 10 hours.
        let series = HourlySeries::hourly_from(start(2001), vec![0.5; 8770]).unwrap();
        let config = ExtractConfig::new().with_durations(vec![1, 24]);
        let ams = extract_maxima(&series, &config).unwrap();
        assert_eq!(ams.years(), &[2001, 2002]);
        assert_eq!(ams.durations(), &[1, 24]);
        assert_eq!(ams.strategy(), Some(WindowStrategy::Sliding));
        assert_eq!(ams.get(2001, 24), Some(12.0));
        // Partial year: the window is truncated to the 10 available hours.
        assert_eq!(ams.get(2002, 24), Some(5.0));
    }

    #[test]
    fn missing_year_is_gap_not_zero() {
        let mut values = vec![1.0; 8760];
        values.extend(std::iter::repeat_n(f64::NAN, 8760));
        let series = HourlySeries::hourly_from(start(2001), values).unwrap();
        let config = ExtractConfig::new()
            .with_durations(vec![6])
            .with_strategy(WindowStrategy::Fixed);
        let ams = extract_maxima(&series, &config).unwrap();
        assert_eq!(ams.get(2001, 6), Some(6.0));
        assert_eq!(ams.get(2002, 6), None);
        assert_eq!(
            ams.coverage_gaps(),
            vec![CoverageGap {
                year: 2002,
                duration: 6
            }]
        );
    }
}
