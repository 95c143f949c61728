//! The analysis engine
//!
//! Runs every analysis of the job-market dataset and collects the results in
//! an `AnalysisReport`. Each section is independently guarded: a missing
//! column or an undersized sample skips that section with an explicit reason
//! and never blocks the others.

pub mod crosstab;
pub mod grouping;
mod report;

use serde::Serialize;

use crate::models::Dataset;
use crate::models::types::{
    AutomationRisk, Categorical, CompanySize, JobGrowthProjection, RemoteFriendly,
};
use crate::schema::Column;
use crate::stats::hypothesis::{AnovaResult, TestResult, one_way_anova, welch_t_test};
use crate::stats::{ConfidenceInterval, DescriptiveStats, confidence_interval, describe};
use crosstab::CrossTab;
use grouping::{count_by, mean_salary_by};

/// Number of entries kept in top-N breakdowns
pub const TOP_N: usize = 10;

/// Confidence level used for all intervals
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Why a section of the report was not computed
#[derive(Debug, Clone, Serialize)]
pub enum SkipReason {
    /// A column the section needs is missing from the source file
    MissingColumn(String),
    /// Too few observations to compute the section's statistic
    InsufficientData(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(name) => write!(f, "column '{name}' not found"),
            Self::InsufficientData(msg) => write!(f, "insufficient data: {msg}"),
        }
    }
}

/// Outcome of one section of the report: a computed value or an explicit skip
#[derive(Debug, Clone, Serialize)]
pub enum SectionResult<T> {
    /// The section was computed
    Computed(T),
    /// The section was skipped, with the reason
    Skipped(SkipReason),
}

impl<T> SectionResult<T> {
    /// The computed value, if any
    pub fn computed(&self) -> Option<&T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    /// Whether the section was computed
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    fn missing_column(column: Column) -> Self {
        let reason = SkipReason::MissingColumn(column.name().to_string());
        log::warn!("Skipping section: {reason}");
        Self::Skipped(reason)
    }

    fn insufficient(message: String) -> Self {
        let reason = SkipReason::InsufficientData(message);
        log::warn!("Skipping section: {reason}");
        Self::Skipped(reason)
    }
}

/// Sample size, mean and confidence interval for one group in a comparison
#[derive(Debug, Clone, Serialize)]
pub struct GroupEstimate {
    /// Group label
    pub label: String,
    /// Number of non-missing observations in the group
    pub n: usize,
    /// Group mean
    pub mean: f64,
    /// Confidence interval for the mean, when the group has at least 2 observations
    pub interval: Option<ConfidenceInterval>,
}

impl GroupEstimate {
    fn new(label: &str, sample: &[f64]) -> Self {
        Self {
            label: label.to_string(),
            n: sample.len(),
            mean: if sample.is_empty() {
                f64::NAN
            } else {
                sample.iter().sum::<f64>() / sample.len() as f64
            },
            interval: confidence_interval(sample, CONFIDENCE_LEVEL).ok(),
        }
    }
}

/// A two-group mean comparison with per-group estimates
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// The Welch t-test result
    pub test: TestResult,
    /// Per-group sample sizes, means and intervals
    pub groups: Vec<GroupEstimate>,
}

/// A k-group mean comparison with per-group estimates
#[derive(Debug, Clone, Serialize)]
pub struct AnovaSection {
    /// The one-way ANOVA result
    pub anova: AnovaResult,
    /// Per-group sample sizes, means and intervals
    pub groups: Vec<GroupEstimate>,
}

/// All computed analyses over one dataset
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Number of records in the dataset
    pub record_count: usize,
    /// Descriptive statistics of the salary column
    pub salary_stats: SectionResult<DescriptiveStats>,
    /// Top job titles among growth-projected postings, by count
    pub growth_job_titles: SectionResult<Vec<(String, usize)>>,
    /// Top locations by mean salary
    pub top_locations_by_salary: SectionResult<Vec<(String, f64)>>,
    /// AI adoption level vs. job growth projection
    pub adoption_growth_crosstab: SectionResult<CrossTab>,
    /// Top skills among growth-projected postings, by count
    pub growth_skills: SectionResult<Vec<(String, usize)>>,
    /// Remote vs. on-site salary comparison (Welch t-test)
    pub remote_salary_comparison: SectionResult<ComparisonResult>,
    /// Salary comparison across company sizes (one-way ANOVA)
    pub company_size_comparison: SectionResult<AnovaSection>,
    /// Salary estimates per automation risk level
    pub automation_risk_salary: SectionResult<Vec<GroupEstimate>>,
}

/// Run every analysis over a loaded dataset
///
/// Pure read over the dataset: calling it again yields the same report.
#[must_use]
pub fn run_analysis(dataset: &Dataset) -> AnalysisReport {
    AnalysisReport {
        record_count: dataset.len(),
        salary_stats: salary_stats_section(dataset),
        growth_job_titles: growth_job_titles_section(dataset),
        top_locations_by_salary: top_locations_section(dataset),
        adoption_growth_crosstab: crosstab_section(dataset),
        growth_skills: growth_skills_section(dataset),
        remote_salary_comparison: remote_comparison_section(dataset),
        company_size_comparison: company_size_section(dataset),
        automation_risk_salary: automation_risk_section(dataset),
    }
}

fn salary_stats_section(dataset: &Dataset) -> SectionResult<DescriptiveStats> {
    if !dataset.has_column(Column::SalaryUsd) {
        return SectionResult::missing_column(Column::SalaryUsd);
    }
    match describe(&dataset.salaries()) {
        Ok(stats) => SectionResult::Computed(stats),
        Err(e) => SectionResult::insufficient(e.to_string()),
    }
}

fn growth_job_titles_section(dataset: &Dataset) -> SectionResult<Vec<(String, usize)>> {
    if !dataset.has_column(Column::JobGrowthProjection) {
        return SectionResult::missing_column(Column::JobGrowthProjection);
    }
    if !dataset.has_column(Column::JobTitle) {
        return SectionResult::missing_column(Column::JobTitle);
    }

    let growth = dataset
        .records()
        .iter()
        .filter(|r| r.job_growth_projection == Some(JobGrowthProjection::Growth));
    SectionResult::Computed(count_by(growth, |r| r.job_title.as_deref(), TOP_N))
}

fn growth_skills_section(dataset: &Dataset) -> SectionResult<Vec<(String, usize)>> {
    if !dataset.has_column(Column::JobGrowthProjection) {
        return SectionResult::missing_column(Column::JobGrowthProjection);
    }
    if !dataset.has_column(Column::RequiredSkills) {
        return SectionResult::missing_column(Column::RequiredSkills);
    }

    let growth = dataset
        .records()
        .iter()
        .filter(|r| r.job_growth_projection == Some(JobGrowthProjection::Growth));
    SectionResult::Computed(count_by(growth, |r| r.required_skills.as_deref(), TOP_N))
}

fn top_locations_section(dataset: &Dataset) -> SectionResult<Vec<(String, f64)>> {
    if !dataset.has_column(Column::Location) {
        return SectionResult::missing_column(Column::Location);
    }
    if !dataset.has_column(Column::SalaryUsd) {
        return SectionResult::missing_column(Column::SalaryUsd);
    }

    SectionResult::Computed(mean_salary_by(
        dataset.records(),
        |r| r.location.as_deref(),
        TOP_N,
    ))
}

fn crosstab_section(dataset: &Dataset) -> SectionResult<CrossTab> {
    if !dataset.has_column(Column::AiAdoptionLevel) {
        return SectionResult::missing_column(Column::AiAdoptionLevel);
    }
    if !dataset.has_column(Column::JobGrowthProjection) {
        return SectionResult::missing_column(Column::JobGrowthProjection);
    }

    SectionResult::Computed(crosstab::cross_tab(
        dataset.records(),
        |r| r.ai_adoption_level,
        |r| r.job_growth_projection,
    ))
}

fn remote_comparison_section(dataset: &Dataset) -> SectionResult<ComparisonResult> {
    if !dataset.has_column(Column::SalaryUsd) {
        return SectionResult::missing_column(Column::SalaryUsd);
    }
    if !dataset.has_column(Column::RemoteFriendly) {
        return SectionResult::missing_column(Column::RemoteFriendly);
    }

    let remote = dataset.salaries_where(|r| r.remote_friendly == Some(RemoteFriendly::Yes));
    let onsite = dataset.salaries_where(|r| r.remote_friendly == Some(RemoteFriendly::No));

    match welch_t_test(&remote, &onsite) {
        Ok(test) => SectionResult::Computed(ComparisonResult {
            test,
            groups: vec![
                GroupEstimate::new("Remote", &remote),
                GroupEstimate::new("On-site", &onsite),
            ],
        }),
        Err(e) => SectionResult::insufficient(e.to_string()),
    }
}

fn automation_risk_section(dataset: &Dataset) -> SectionResult<Vec<GroupEstimate>> {
    if !dataset.has_column(Column::SalaryUsd) {
        return SectionResult::missing_column(Column::SalaryUsd);
    }
    if !dataset.has_column(Column::AutomationRisk) {
        return SectionResult::missing_column(Column::AutomationRisk);
    }

    let groups: Vec<GroupEstimate> = AutomationRisk::ALL
        .iter()
        .map(|risk| {
            let sample = dataset.salaries_where(|r| r.automation_risk == Some(*risk));
            GroupEstimate::new(risk.as_str(), &sample)
        })
        .collect();

    if groups.iter().all(|g| g.n == 0) {
        return SectionResult::insufficient(
            "no records carry both an automation risk level and a salary".to_string(),
        );
    }
    SectionResult::Computed(groups)
}

fn company_size_section(dataset: &Dataset) -> SectionResult<AnovaSection> {
    if !dataset.has_column(Column::SalaryUsd) {
        return SectionResult::missing_column(Column::SalaryUsd);
    }
    if !dataset.has_column(Column::CompanySize) {
        return SectionResult::missing_column(Column::CompanySize);
    }

    let samples: Vec<Vec<f64>> = CompanySize::ALL
        .iter()
        .map(|size| dataset.salaries_where(|r| r.company_size == Some(*size)))
        .collect();
    let slices: Vec<&[f64]> = samples.iter().map(Vec::as_slice).collect();

    match one_way_anova(&slices) {
        Ok(anova) => SectionResult::Computed(AnovaSection {
            anova,
            groups: CompanySize::ALL
                .iter()
                .zip(&samples)
                .map(|(size, sample)| GroupEstimate::new(size.as_str(), sample))
                .collect(),
        }),
        Err(e) => SectionResult::insufficient(e.to_string()),
    }
}
