//! Contingency analysis between two categorical columns
//!
//! Produces the full cross-tabulation grid: one row per value of the first
//! column's domain, one column per value of the second, in their defined
//! orders. Cells with no co-occurring records are explicit zeros.

use serde::Serialize;

use crate::models::JobRecord;
use crate::models::types::Categorical;

/// A cross-tabulation of two categorical columns
#[derive(Debug, Clone, Serialize)]
pub struct CrossTab {
    /// Row category labels, in the row domain's defined order
    pub row_labels: Vec<String>,
    /// Column category labels, in the column domain's defined order
    pub col_labels: Vec<String>,
    /// Co-occurrence counts, indexed `[row][col]`
    pub counts: Vec<Vec<u64>>,
    /// Number of records with non-missing values in both columns
    pub total: u64,
}

impl CrossTab {
    /// The count for a (row, col) pair of domain indices
    #[must_use]
    pub fn count(&self, row: usize, col: usize) -> u64 {
        self.counts[row][col]
    }
}

/// Cross-tabulate two categorical fields over a set of records
///
/// Records missing either field are excluded from the table and the total.
pub fn cross_tab<'a, I, R, C>(
    records: I,
    row_of: impl Fn(&JobRecord) -> Option<R>,
    col_of: impl Fn(&JobRecord) -> Option<C>,
) -> CrossTab
where
    I: IntoIterator<Item = &'a JobRecord>,
    R: Categorical,
    C: Categorical,
{
    let mut counts = vec![vec![0_u64; C::ALL.len()]; R::ALL.len()];
    let mut total = 0_u64;

    for record in records {
        let (Some(row), Some(col)) = (row_of(record), col_of(record)) else {
            continue;
        };
        // A value missing from ALL is a broken Categorical impl, not a data issue
        let row_idx = R::ALL
            .iter()
            .position(|v| *v == row)
            .expect("every domain value must appear in ALL");
        let col_idx = C::ALL
            .iter()
            .position(|v| *v == col)
            .expect("every domain value must appear in ALL");
        counts[row_idx][col_idx] += 1;
        total += 1;
    }

    CrossTab {
        row_labels: R::ALL.iter().map(|v| v.as_str().to_string()).collect(),
        col_labels: C::ALL.iter().map(|v| v.as_str().to_string()).collect(),
        counts,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::{AiAdoptionLevel, JobGrowthProjection};

    fn record(
        adoption: Option<AiAdoptionLevel>,
        growth: Option<JobGrowthProjection>,
    ) -> JobRecord {
        JobRecord {
            ai_adoption_level: adoption,
            job_growth_projection: growth,
            ..JobRecord::default()
        }
    }

    #[test]
    fn test_cross_tab_counts_and_total() {
        let records = vec![
            record(Some(AiAdoptionLevel::High), Some(JobGrowthProjection::Growth)),
            record(Some(AiAdoptionLevel::High), Some(JobGrowthProjection::Growth)),
            record(Some(AiAdoptionLevel::Low), Some(JobGrowthProjection::Decline)),
            record(Some(AiAdoptionLevel::Medium), None),
            record(None, Some(JobGrowthProjection::Stable)),
        ];

        let table = cross_tab(
            &records,
            |r| r.ai_adoption_level,
            |r| r.job_growth_projection,
        );

        assert_eq!(table.row_labels, vec!["Low", "Medium", "High"]);
        assert_eq!(table.col_labels, vec!["Growth", "Stable", "Decline"]);
        // High x Growth
        assert_eq!(table.count(2, 0), 2);
        // Low x Decline
        assert_eq!(table.count(0, 2), 1);
        // Records missing either field count toward neither cells nor total
        assert_eq!(table.total, 3);
    }

    #[test]
    fn test_cell_sum_equals_total() {
        let records = vec![
            record(Some(AiAdoptionLevel::Low), Some(JobGrowthProjection::Growth)),
            record(Some(AiAdoptionLevel::Medium), Some(JobGrowthProjection::Stable)),
            record(Some(AiAdoptionLevel::High), Some(JobGrowthProjection::Decline)),
            record(Some(AiAdoptionLevel::High), Some(JobGrowthProjection::Growth)),
            record(None, None),
        ];

        let table = cross_tab(
            &records,
            |r| r.ai_adoption_level,
            |r| r.job_growth_projection,
        );

        let cell_sum: u64 = table.counts.iter().flatten().sum();
        assert_eq!(cell_sum, table.total);
        assert_eq!(table.total, 4);
    }

    #[test]
    fn test_empty_cells_are_explicit_zeros() {
        let records = vec![record(
            Some(AiAdoptionLevel::Low),
            Some(JobGrowthProjection::Growth),
        )];

        let table = cross_tab(
            &records,
            |r| r.ai_adoption_level,
            |r| r.job_growth_projection,
        );

        assert_eq!(table.counts.len(), 3);
        assert!(table.counts.iter().all(|row| row.len() == 3));
        assert_eq!(table.count(0, 0), 1);
        assert_eq!(table.count(2, 2), 0);
    }

    // A Categorical impl whose ALL does not cover the whole enum
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BrokenDomain {
        Listed,
        Unlisted,
    }

    impl Categorical for BrokenDomain {
        const ALL: &'static [Self] = &[Self::Listed];

        fn as_str(self) -> &'static str {
            match self {
                Self::Listed => "Listed",
                Self::Unlisted => "Unlisted",
            }
        }
    }

    #[test]
    #[should_panic(expected = "every domain value must appear in ALL")]
    fn test_value_outside_declared_domain_panics() {
        let records = vec![record(
            Some(AiAdoptionLevel::Low),
            Some(JobGrowthProjection::Growth),
        )];
        cross_tab(
            &records,
            |_| Some(BrokenDomain::Unlisted),
            |r| r.job_growth_projection,
        );
    }
}
