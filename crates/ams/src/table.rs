//! Annual maxima table (year × duration).

use crate::config::{WindowStrategy, validate_durations};
use crate::error::AmsError;

/// A (year, duration) cell with no valid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageGap {
    /// Calendar year.
    pub year: i32,
    /// Duration in hours.
    pub duration: u32,
}

/// Annual maximum depth per calendar year and aggregation duration.
///
/// Exactly one row per year present in the source and one column per
/// configured duration. A cell is `None` when no valid window existed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualMaxima {
    years: Vec<i32>,
    durations: Vec<u32>,
    /// Row-major: `values[year_idx * n_durations + duration_idx]`.
    values: Vec<Option<f64>>,
    strategy: Option<WindowStrategy>,
}

impl AnnualMaxima {
    pub(crate) fn new(
        years: Vec<i32>,
        durations: Vec<u32>,
        values: Vec<Option<f64>>,
        strategy: Option<WindowStrategy>,
    ) -> Self {
        debug_assert_eq!(values.len(), years.len() * durations.len());
        Self {
            years,
            durations,
            values,
            strategy,
        }
    }

    /// Assembles a table from externally computed columns, one per duration.
    ///
    /// # Errors
    ///
    /// - Duration list errors as in [`ExtractConfig::validate`](crate::ExtractConfig::validate).
    /// - [`AmsError::InvalidTable`] if years are not strictly increasing, the
    ///   column count differs from the duration count, a column length differs
    ///   from the year count, or a value is negative or non-finite.
    pub fn from_columns(
        years: Vec<i32>,
        durations: Vec<u32>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, AmsError> {
        validate_durations(&durations)?;

        if years.is_empty() {
            return Err(AmsError::InvalidTable {
                reason: "no years".to_string(),
            });
        }
        if years.windows(2).any(|w| w[1] <= w[0]) {
            return Err(AmsError::InvalidTable {
                reason: "years must be strictly increasing".to_string(),
            });
        }
        if columns.len() != durations.len() {
            return Err(AmsError::InvalidTable {
                reason: format!(
                    "{} columns for {} durations",
                    columns.len(),
                    durations.len()
                ),
            });
        }
        for (col, &d) in columns.iter().zip(durations.iter()) {
            if col.len() != years.len() {
                return Err(AmsError::InvalidTable {
                    reason: format!(
                        "column {d}H has {} values for {} years",
                        col.len(),
                        years.len()
                    ),
                });
            }
            if let Some(v) = col.iter().flatten().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(AmsError::InvalidTable {
                    reason: format!("column {d}H holds invalid depth {v}"),
                });
            }
        }

        let n_durations = durations.len();
        let mut values = vec![None; years.len() * n_durations];
        for (j, col) in columns.iter().enumerate() {
            for (i, &v) in col.iter().enumerate() {
                values[i * n_durations + j] = v;
            }
        }

        Ok(Self::new(years, durations, values, None))
    }

    /// Calendar years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Durations in hours, in column order.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Strategy that produced the table, `None` if built from columns.
    pub fn strategy(&self) -> Option<WindowStrategy> {
        self.strategy
    }

    /// Number of rows.
    pub fn n_years(&self) -> usize {
        self.years.len()
    }

    /// Number of columns.
    pub fn n_durations(&self) -> usize {
        self.durations.len()
    }

    fn duration_index(&self, duration: u32) -> Option<usize> {
        self.durations.iter().position(|&d| d == duration)
    }

    /// Cell value; `None` for a missing cell or an unknown year/duration.
    pub fn get(&self, year: i32, duration: u32) -> Option<f64> {
        let i = self.years.iter().position(|&y| y == year)?;
        let j = self.duration_index(duration)?;
        self.values[i * self.n_durations() + j]
    }

    /// One duration's column in year order, or `None` for an unknown duration.
    pub fn column(&self, duration: u32) -> Option<Vec<Option<f64>>> {
        let j = self.duration_index(duration)?;
        Some(
            self.values
                .iter()
                .skip(j)
                .step_by(self.n_durations())
                .copied()
                .collect(),
        )
    }

    /// Non-missing values of one duration's column in year order.
    pub fn sample(&self, duration: u32) -> Option<Vec<f64>> {
        self.column(duration)
            .map(|col| col.into_iter().flatten().collect())
    }

    /// Cells with no valid window, in row-major order.
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let n_durations = self.n_durations();
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| CoverageGap {
                year: self.years[k / n_durations],
                duration: self.durations[k % n_durations],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AnnualMaxima {
        AnnualMaxima::from_columns(
            vec![2001, 2002, 2003],
            vec![1, 24],
            vec![
                vec![Some(1.0), None, Some(3.0)],
                vec![Some(10.0), Some(20.0), Some(30.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn from_columns_layout() {
        let t = table();
        assert_eq!(t.n_years(), 3);
        assert_eq!(t.n_durations(), 2);
        assert_eq!(t.get(2002, 24), Some(20.0));
        assert_eq!(t.get(2002, 1), None);
        assert_eq!(t.get(1999, 1), None);
        assert_eq!(t.get(2001, 6), None);
        assert_eq!(t.strategy(), None);
    }

    #[test]
    fn column_and_sample() {
        let t = table();
        assert_eq!(t.column(1).unwrap(), vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(t.sample(1).unwrap(), vec![1.0, 3.0]);
        assert_eq!(t.sample(24).unwrap(), vec![10.0, 20.0, 30.0]);
        assert!(t.column(48).is_none());
    }

    #[test]
    fn coverage_gaps_listed() {
        assert_eq!(
            table().coverage_gaps(),
            vec![CoverageGap {
                year: 2002,
                duration: 1
            }]
        );
    }

    #[test]
    fn rejects_unordered_years() {
        let r = AnnualMaxima::from_columns(vec![2002, 2001], vec![1], vec![vec![None, None]]);
        assert!(matches!(r, Err(AmsError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_column_count_mismatch() {
        let r = AnnualMaxima::from_columns(vec![2001], vec![1, 2], vec![vec![Some(1.0)]]);
        assert!(matches!(r, Err(AmsError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_short_column() {
        let r = AnnualMaxima::from_columns(vec![2001, 2002], vec![1], vec![vec![Some(1.0)]]);
        assert!(matches!(r, Err(AmsError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_negative_depth() {
        let r = AnnualMaxima::from_columns(vec![2001], vec![1], vec![vec![Some(-1.0)]]);
        assert!(matches!(r, Err(AmsError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_bad_durations() {
        let r = AnnualMaxima::from_columns(vec![2001], vec![], vec![]);
        assert!(matches!(r, Err(AmsError::EmptyDurations)));
    }
}
