//! Job-market record and dataset models
//!
//! A `JobRecord` is one observation from the source file; a `Dataset` is the
//! full set of records, loaded once and held read-only for the duration of
//! the analysis. Derived views (filtered salary samples, group aggregates)
//! are recomputed on demand and never mutate the dataset.

pub mod types;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::schema::Column;
use types::{AiAdoptionLevel, AutomationRisk, CompanySize, JobGrowthProjection, RemoteFriendly};

/// One job-market observation
///
/// Every field is optional: a missing source column leaves the field unset
/// on every record, and individual cells may be empty or (in lenient mode)
/// carry a value outside its declared domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobRecord {
    /// Job title
    pub job_title: Option<String>,
    /// Industry
    pub industry: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Required skills (free-form, potentially comma-joined)
    pub required_skills: Option<String>,
    /// Whether the position is remote friendly
    pub remote_friendly: Option<RemoteFriendly>,
    /// Projected job growth
    pub job_growth_projection: Option<JobGrowthProjection>,
    /// Company size
    pub company_size: Option<CompanySize>,
    /// AI adoption level
    pub ai_adoption_level: Option<AiAdoptionLevel>,
    /// Automation risk
    pub automation_risk: Option<AutomationRisk>,
    /// Yearly salary in USD
    pub salary_usd: Option<f64>,
}

/// The loaded dataset: records plus the set of source columns actually present
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<JobRecord>,
    present_columns: FxHashSet<Column>,
}

impl Dataset {
    /// Create a dataset from records and the columns found in the source file
    #[must_use]
    pub fn new(records: Vec<JobRecord>, present_columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            records,
            present_columns: present_columns.into_iter().collect(),
        }
    }

    /// All records, in file order
    #[must_use]
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source file carried the given expected column
    #[must_use]
    pub fn has_column(&self, column: Column) -> bool {
        self.present_columns.contains(&column)
    }

    /// All non-missing salary values, in file order
    #[must_use]
    pub fn salaries(&self) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.salary_usd).collect()
    }

    /// Non-missing salary values for records matching a predicate
    #[must_use]
    pub fn salaries_where(&self, predicate: impl Fn(&JobRecord) -> bool) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .filter_map(|r| r.salary_usd)
            .collect()
    }
}
