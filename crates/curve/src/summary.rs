//! Per-run report of durations that could not be fully resolved.

use idf_ams::CoverageGap;
use idf_bootstrap::BootstrapError;
use idf_gev::GevError;

/// A problem confined to one duration.
#[derive(Debug, Clone)]
pub enum DurationIssue {
    /// The point fit failed; every cell of the column is missing.
    PointFitFailed {
        /// Affected duration (hours).
        duration: u32,
        /// Fitting error.
        error: GevError,
    },
    /// Bootstrap bounds failed; only the central block is filled.
    CiFailed {
        /// Affected duration (hours).
        duration: u32,
        /// Bootstrap error.
        error: BootstrapError,
    },
}

impl DurationIssue {
    /// Affected duration (hours).
    pub fn duration(&self) -> u32 {
        match self {
            Self::PointFitFailed { duration, .. } | Self::CiFailed { duration, .. } => *duration,
        }
    }
}

impl std::fmt::Display for DurationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointFitFailed { duration, error } => {
                write!(f, "{duration}h: point fit failed: {error}")
            }
            Self::CiFailed { duration, error } => {
                write!(f, "{duration}h: confidence bounds failed: {error}")
            }
        }
    }
}

/// Durations and years affected during a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    issues: Vec<DurationIssue>,
    coverage_gaps: Vec<CoverageGap>,
}

impl RunSummary {
    pub(crate) fn new(issues: Vec<DurationIssue>, coverage_gaps: Vec<CoverageGap>) -> Self {
        Self {
            issues,
            coverage_gaps,
        }
    }

    /// Per-duration fitting problems, in duration order.
    pub fn issues(&self) -> &[DurationIssue] {
        &self.issues
    }

    /// (year, duration) cells of the maxima table with no valid window.
    pub fn coverage_gaps(&self) -> &[CoverageGap] {
        &self.coverage_gaps
    }

    /// Returns `true` when nothing was affected.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.coverage_gaps.is_empty()
    }

    /// Sorted, deduplicated durations with an issue or a coverage gap.
    pub fn affected_durations(&self) -> Vec<u32> {
        let mut out: Vec<u32> = self
            .issues
            .iter()
            .map(DurationIssue::duration)
            .chain(self.coverage_gaps.iter().map(|g| g.duration))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Sorted, deduplicated years with at least one coverage gap.
    pub fn affected_years(&self) -> Vec<i32> {
        let mut out: Vec<i32> = self.coverage_gaps.iter().map(|g| g.year).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
