//! The IDF table: depth estimates keyed by duration.

use crate::return_period::ReturnPeriods;

/// Which block of the table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Lower confidence bound.
    Lower,
    /// Point estimate or bootstrap median, see [`CentralEstimate`].
    Central,
    /// Upper confidence bound.
    Upper,
}

impl RowKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Lower => "L",
            Self::Central => "",
            Self::Upper => "U",
        }
    }
}

/// What the central block of one duration column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralEstimate {
    /// Quantiles of the fit on the observed maxima.
    Point,
    /// Median of the bootstrap quantiles.
    BootstrapMedian,
}

/// One row of an [`IdfTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct IdfRow {
    kind: RowKind,
    years: f64,
    label: String,
}

impl IdfRow {
    /// Block of the row.
    pub fn kind(&self) -> RowKind {
        self.kind
    }

    /// Return period in years.
    pub fn years(&self) -> f64 {
        self.years
    }

    /// Row label, e.g. `"L10-yr"`, `"10-yr"` or `"U10-yr"`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Depth estimates per duration and return period.
///
/// Rows are ordered by block (lower, central, upper when bounds are
/// requested; central only otherwise) and, inside a block, by the
/// [`ReturnPeriods`] order. The row order is the same for every duration
/// column. Unresolved cells are `None`. Each column records whether its
/// central block is the point estimate or the bootstrap median, which
/// differ when the bounds for that duration could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    rows: Vec<IdfRow>,
    durations: Vec<u32>,
    columns: Vec<Vec<Option<f64>>>,
    central: Vec<Option<CentralEstimate>>,
    block_len: usize,
}

impl IdfTable {
    /// Creates a table with every cell unresolved.
    pub(crate) fn empty(return_periods: &ReturnPeriods, durations: &[u32], with_ci: bool) -> Self {
        let kinds: &[RowKind] = if with_ci {
            &[RowKind::Lower, RowKind::Central, RowKind::Upper]
        } else {
            &[RowKind::Central]
        };
        let years = return_periods.years();
        let labels = return_periods.labels();
        let rows: Vec<IdfRow> = kinds
            .iter()
            .flat_map(|&kind| {
                years.iter().zip(labels.iter()).map(move |(&y, l)| IdfRow {
                    kind,
                    years: y,
                    label: format!("{}{l}", kind.prefix()),
                })
            })
            .collect();
        let n_rows = rows.len();
        Self {
            rows,
            durations: durations.to_vec(),
            columns: vec![vec![None; n_rows]; durations.len()],
            central: vec![None; durations.len()],
            block_len: years.len(),
        }
    }

    /// Fills one block of the column at `col` from `values`.
    pub(crate) fn fill_block(&mut self, col: usize, kind: RowKind, values: &[f64]) {
        let Some(start) = self.block_start(kind) else {
            return;
        };
        for (cell, &v) in self.columns[col][start..start + self.block_len]
            .iter_mut()
            .zip(values)
        {
            *cell = v.is_finite().then_some(v);
        }
    }

    /// Records what the central block of the column at `col` holds.
    pub(crate) fn set_central(&mut self, col: usize, estimate: CentralEstimate) {
        self.central[col] = Some(estimate);
    }

    fn block_start(&self, kind: RowKind) -> Option<usize> {
        self.rows.iter().position(|r| r.kind == kind)
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[IdfRow] {
        &self.rows
    }

    /// Row labels in table order.
    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label()).collect()
    }

    /// Durations (hours), one column each.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table carries lower and upper blocks.
    pub fn has_ci(&self) -> bool {
        self.rows.len() > self.block_len
    }

    /// Full column for `duration`, in row order.
    pub fn column(&self, duration: u32) -> Option<&[Option<f64>]> {
        let col = self.durations.iter().position(|&d| d == duration)?;
        Some(&self.columns[col])
    }

    /// Source of the central block for `duration`.
    ///
    /// `None` when the duration is unknown or its point fit failed.
    pub fn central_estimate(&self, duration: u32) -> Option<CentralEstimate> {
        let col = self.durations.iter().position(|&d| d == duration)?;
        self.central[col]
    }

    /// One block of the column for `duration`, in return period order.
    ///
    /// `None` when the duration is unknown or the block is absent.
    pub fn block(&self, duration: u32, kind: RowKind) -> Option<&[Option<f64>]> {
        let column = self.column(duration)?;
        let start = self.block_start(kind)?;
        Some(&column[start..start + self.block_len])
    }

    /// Cell at the row labelled `label` and `duration`.
    pub fn get(&self, label: &str, duration: u32) -> Option<f64> {
        let row = self.rows.iter().position(|r| r.label == label)?;
        self.column(duration)?[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ci_rows_are_lower_central_upper() {
        let rp = ReturnPeriods::from_years(&[2.0, 10.0]).unwrap();
        let table = IdfTable::empty(&rp, &[1, 24], true);
        assert_eq!(
            table.row_labels(),
            vec!["L2-yr", "L10-yr", "2-yr", "10-yr", "U2-yr", "U10-yr"]
        );
        assert!(table.has_ci());
        assert_eq!(table.rows()[3].kind(), RowKind::Central);
        assert_eq!(table.rows()[3].years(), 10.0);
    }

    #[test]
    fn point_rows_only_without_ci() {
        let table = IdfTable::empty(&ReturnPeriods::new(), &[1], false);
        assert_eq!(table.n_rows(), 7);
        assert!(!table.has_ci());
        assert!(table.block(1, RowKind::Lower).is_none());
    }

    #[test]
    fn fill_block_targets_its_rows() {
        let rp = ReturnPeriods::from_years(&[2.0, 10.0]).unwrap();
        let mut table = IdfTable::empty(&rp, &[1, 24], true);
        table.fill_block(1, RowKind::Upper, &[5.0, 9.0]);
        assert_eq!(table.column(1).unwrap(), &[None; 6]);
        assert_eq!(
            table.block(24, RowKind::Upper).unwrap(),
            &[Some(5.0), Some(9.0)]
        );
        assert_eq!(table.get("U10-yr", 24), Some(9.0));
        assert_eq!(table.get("10-yr", 24), None);
        assert_eq!(table.get("nope", 24), None);
    }

    #[test]
    fn central_estimate_is_per_column() {
        let rp = ReturnPeriods::from_years(&[2.0]).unwrap();
        let mut table = IdfTable::empty(&rp, &[1, 6, 24], true);
        table.set_central(0, CentralEstimate::BootstrapMedian);
        table.set_central(2, CentralEstimate::Point);
        assert_eq!(
            table.central_estimate(1),
            Some(CentralEstimate::BootstrapMedian)
        );
        assert_eq!(table.central_estimate(6), None);
        assert_eq!(table.central_estimate(24), Some(CentralEstimate::Point));
        assert_eq!(table.central_estimate(48), None);
    }

    #[test]
    fn non_finite_values_stay_missing() {
        let rp = ReturnPeriods::from_years(&[2.0]).unwrap();
        let mut table = IdfTable::empty(&rp, &[3], false);
        table.fill_block(0, RowKind::Central, &[f64::NAN]);
        assert_eq!(table.get("2-yr", 3), None);
    }
}
