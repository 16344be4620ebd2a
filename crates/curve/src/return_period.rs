//! Ordered return periods and their exceedance probabilities.

use crate::error::IdfError;

/// Default return periods in years.
pub const DEFAULT_RETURN_PERIODS: [f64; 7] = [2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 200.0];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    years: f64,
    probability: f64,
}

/// Ordered set of return periods `T` with annual exceedance probability `1/T`.
///
/// The order given at construction is the row order of every
/// [`IdfTable`](crate::IdfTable) built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnPeriods {
    entries: Vec<Entry>,
}

impl ReturnPeriods {
    /// The default set: 2, 5, 10, 25, 50, 100 and 200 years.
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_RETURN_PERIODS
                .iter()
                .map(|&years| Entry {
                    years,
                    probability: 1.0 / years,
                })
                .collect(),
        }
    }

    /// Builds the set from return periods in years.
    ///
    /// # Errors
    ///
    /// [`IdfError::EmptyReturnPeriods`] or [`IdfError::InvalidReturnPeriod`]
    /// for an empty list or a period that is not finite and above 1.
    pub fn from_years(years: &[f64]) -> Result<Self, IdfError> {
        if years.is_empty() {
            return Err(IdfError::EmptyReturnPeriods);
        }
        let entries = years
            .iter()
            .map(|&t| {
                if t.is_finite() && t > 1.0 {
                    Ok(Entry {
                        years: t,
                        probability: 1.0 / t,
                    })
                } else {
                    Err(IdfError::InvalidReturnPeriod { years: t })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Builds the set from annual exceedance probabilities.
    ///
    /// # Errors
    ///
    /// [`IdfError::EmptyReturnPeriods`] or [`IdfError::InvalidProbability`]
    /// for an empty list or a probability outside (0, 1).
    pub fn from_probabilities(probabilities: &[f64]) -> Result<Self, IdfError> {
        if probabilities.is_empty() {
            return Err(IdfError::EmptyReturnPeriods);
        }
        let entries = probabilities
            .iter()
            .map(|&p| {
                if p.is_finite() && p > 0.0 && p < 1.0 {
                    Ok(Entry {
                        years: 1.0 / p,
                        probability: p,
                    })
                } else {
                    Err(IdfError::InvalidProbability { p })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Number of return periods.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return periods in years, in set order.
    pub fn years(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.years).collect()
    }

    /// Exceedance probabilities, in set order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.probability).collect()
    }

    /// Labels such as `"2-yr"` and `"100-yr"`, in set order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| label(e.years)).collect()
    }
}

impl Default for ReturnPeriods {
    fn default() -> Self {
        Self::new()
    }
}

fn label(years: f64) -> String {
    let rounded = years.round();
    if (years - rounded).abs() <= 1e-9 * years {
        format!("{rounded:.0}-yr")
    } else {
        format!("{years}-yr")
    }
}
