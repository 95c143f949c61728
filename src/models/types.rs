//! Common domain type definitions
//!
//! This module contains the categorical types used across the job-market
//! records. The three ordinal columns (company size, AI adoption level,
//! automation risk) are modeled as enums with a derived total order, so
//! axis ordering and comparisons follow the declared domain rather than
//! string order.

use serde::Serialize;

/// A categorical field with a fixed, ordered value domain
///
/// `ALL` lists the legal values in their defined order; cross-tabulations
/// and grouped summaries iterate it so that every category appears, with
/// explicit zeros where no record matches.
pub trait Categorical: Copy + Eq + Sized + 'static {
    /// The value domain, in its defined order
    const ALL: &'static [Self];

    /// The value's label as it appears in the source file
    fn as_str(self) -> &'static str;

    /// Parse a raw value from the source file
    ///
    /// Returns `None` for values outside the declared domain; the loader
    /// decides whether that is a validation error (strict mode) or a
    /// missing value (lenient mode).
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .copied()
    }
}

/// Whether a position is remote friendly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RemoteFriendly {
    /// The position can be held remotely
    Yes,
    /// The position is on-site only
    No,
}

impl Categorical for RemoteFriendly {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Projected growth of the job category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobGrowthProjection {
    /// The category is projected to grow
    Growth,
    /// The category is projected to stay stable
    Stable,
    /// The category is projected to decline
    Decline,
}

impl Categorical for JobGrowthProjection {
    const ALL: &'static [Self] = &[Self::Growth, Self::Stable, Self::Decline];

    fn as_str(self) -> &'static str {
        match self {
            Self::Growth => "Growth",
            Self::Stable => "Stable",
            Self::Decline => "Decline",
        }
    }
}

/// Company size (ordinal: Small < Medium < Large)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CompanySize {
    /// Small company
    Small,
    /// Medium company
    Medium,
    /// Large company
    Large,
}

impl Categorical for CompanySize {
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// AI adoption level at the employer (ordinal: Low < Medium < High)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AiAdoptionLevel {
    /// Low adoption
    Low,
    /// Medium adoption
    Medium,
    /// High adoption
    High,
}

impl Categorical for AiAdoptionLevel {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Automation risk of the position (ordinal: Low < Medium < High)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AutomationRisk {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl Categorical for AutomationRisk {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}
