//! A Rust library for analyzing AI job-market data: descriptive statistics,
//! grouped aggregation, contingency tables, and hypothesis testing over a
//! CSV dataset loaded into an immutable, typed structure.

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod schema;
pub mod stats;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::LoaderConfig;
pub use error::{JobInsightsError, Result};
pub use loader::load_dataset;
pub use models::{Dataset, JobRecord};
pub use models::types::{
    AiAdoptionLevel, AutomationRisk, Categorical, CompanySize, JobGrowthProjection,
    RemoteFriendly,
};
pub use schema::Column;

// Statistical primitives
pub use stats::{ConfidenceInterval, DescriptiveStats, confidence_interval, describe};
pub use stats::hypothesis::{
    ALPHA, AnovaResult, Conclusion, TestResult, one_way_anova, welch_t_test,
};

// Analysis engine
pub use analysis::{AnalysisReport, SectionResult, SkipReason, run_analysis};
pub use analysis::crosstab::CrossTab;
