//! Expected column set for the job-market dataset
//!
//! The source file is a CSV with a fixed set of named columns. Analyses are
//! guarded per column: a missing column skips the sections that need it
//! rather than failing the whole run, so this module tracks which of the
//! expected columns a file actually carries.

use arrow::datatypes::Schema;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// An expected column of the job-market dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    /// Job title (free text)
    JobTitle,
    /// Industry (free text)
    Industry,
    /// Location (free text)
    Location,
    /// Required skills, potentially comma-joined free text
    RequiredSkills,
    /// Whether the position is remote friendly ("Yes"/"No")
    RemoteFriendly,
    /// Projected job growth ("Growth"/"Stable"/"Decline")
    JobGrowthProjection,
    /// Company size (ordered: Small < Medium < Large)
    CompanySize,
    /// AI adoption level (ordered: Low < Medium < High)
    AiAdoptionLevel,
    /// Automation risk (ordered: Low < Medium < High)
    AutomationRisk,
    /// Yearly salary in USD (continuous, may be missing)
    SalaryUsd,
}

impl Column {
    /// All expected columns, in the order they appear in the source file
    pub const ALL: [Self; 10] = [
        Self::JobTitle,
        Self::Industry,
        Self::Location,
        Self::RequiredSkills,
        Self::RemoteFriendly,
        Self::JobGrowthProjection,
        Self::CompanySize,
        Self::AiAdoptionLevel,
        Self::AutomationRisk,
        Self::SalaryUsd,
    ];

    /// The column name as it appears in the CSV header
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JobTitle => "Job_Title",
            Self::Industry => "Industry",
            Self::Location => "Location",
            Self::RequiredSkills => "Required_Skills",
            Self::RemoteFriendly => "Remote_Friendly",
            Self::JobGrowthProjection => "Job_Growth_Projection",
            Self::CompanySize => "Company_Size",
            Self::AiAdoptionLevel => "AI_Adoption_Level",
            Self::AutomationRisk => "Automation_Risk",
            Self::SalaryUsd => "Salary_USD",
        }
    }

    /// Look up an expected column by its CSV header name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|c| c.name() == name).copied()
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine which expected columns are present in a file schema
///
/// Logs a warning for every expected column the file does not carry;
/// the sections needing those columns are skipped later.
#[must_use]
pub fn present_columns(schema: &Schema) -> FxHashSet<Column> {
    let present: FxHashSet<Column> = schema
        .fields()
        .iter()
        .filter_map(|f| Column::from_name(f.name()))
        .collect();

    for column in Column::ALL {
        if !present.contains(&column) {
            log::warn!("Expected column {} not found in file, dependent analyses will be skipped", column.name());
        }
    }

    present
}
