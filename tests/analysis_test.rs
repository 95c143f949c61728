//! End-to-end tests for the analysis engine and its per-section guarding

use job_insights::{
    AiAdoptionLevel, AutomationRisk, Column, CompanySize, Dataset, JobGrowthProjection, JobRecord,
    RemoteFriendly, SectionResult, SkipReason, run_analysis,
};

fn record(
    title: &str,
    location: &str,
    remote: RemoteFriendly,
    growth: JobGrowthProjection,
    size: CompanySize,
    salary: f64,
) -> JobRecord {
    JobRecord {
        job_title: Some(title.to_string()),
        location: Some(location.to_string()),
        required_skills: Some("Python".to_string()),
        remote_friendly: Some(remote),
        job_growth_projection: Some(growth),
        company_size: Some(size),
        ai_adoption_level: Some(AiAdoptionLevel::Medium),
        // Larger companies in the fixture carry the lower automation risk
        automation_risk: Some(match size {
            CompanySize::Large => AutomationRisk::Low,
            CompanySize::Medium => AutomationRisk::Medium,
            CompanySize::Small => AutomationRisk::High,
        }),
        salary_usd: Some(salary),
        ..JobRecord::default()
    }
}

fn full_dataset() -> Dataset {
    use CompanySize::{Large, Medium, Small};
    use JobGrowthProjection::{Growth, Stable};
    use RemoteFriendly::{No, Yes};

    Dataset::new(
        vec![
            record("AI Researcher", "Berlin", Yes, Growth, Large, 95_000.0),
            record("AI Researcher", "Berlin", Yes, Growth, Large, 90_000.0),
            record("AI Researcher", "Berlin", Yes, Growth, Large, 92_000.0),
            record("Data Engineer", "London", No, Growth, Medium, 60_000.0),
            record("Data Engineer", "London", No, Stable, Medium, 62_000.0),
            record("Analyst", "Oslo", No, Stable, Small, 40_000.0),
            record("Analyst", "Oslo", No, Stable, Small, 42_000.0),
        ],
        Column::ALL,
    )
}

#[test]
fn test_full_report_computes_every_section() {
    let report = run_analysis(&full_dataset());
    assert_eq!(report.record_count, 7);
    assert!(report.salary_stats.is_computed());
    assert!(report.growth_job_titles.is_computed());
    assert!(report.top_locations_by_salary.is_computed());
    assert!(report.adoption_growth_crosstab.is_computed());
    assert!(report.growth_skills.is_computed());
    assert!(report.remote_salary_comparison.is_computed());
    assert!(report.company_size_comparison.is_computed());
    assert!(report.automation_risk_salary.is_computed());
}

#[test]
fn test_salary_stats_values() {
    let report = run_analysis(&full_dataset());
    let stats = report.salary_stats.computed().unwrap();
    assert_eq!(stats.count, 7);
    assert!(stats.mean >= stats.min && stats.mean <= stats.max);
    assert_eq!(stats.min, 40_000.0);
    assert_eq!(stats.max, 95_000.0);
}

#[test]
fn test_top_locations_sorted_descending_with_fewer_than_limit() {
    let report = run_analysis(&full_dataset());
    let locations = report.top_locations_by_salary.computed().unwrap();

    // Three distinct locations, so exactly three entries
    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0].0, "Berlin");
    assert_eq!(locations[1].0, "London");
    assert_eq!(locations[2].0, "Oslo");
    assert!(locations[0].1 > locations[1].1);
    assert!(locations[1].1 > locations[2].1);
}

#[test]
fn test_growth_job_titles_restricted_to_growth_postings() {
    let report = run_analysis(&full_dataset());
    let titles = report.growth_job_titles.computed().unwrap();
    assert_eq!(
        titles,
        &vec![
            ("AI Researcher".to_string(), 3),
            ("Data Engineer".to_string(), 1)
        ]
    );
}

#[test]
fn test_crosstab_total_matches_complete_records() {
    let report = run_analysis(&full_dataset());
    let table = report.adoption_growth_crosstab.computed().unwrap();
    let cell_sum: u64 = table.counts.iter().flatten().sum();
    assert_eq!(cell_sum, table.total);
    assert_eq!(table.total, 7);
}

#[test]
fn test_remote_comparison_detects_salary_gap() {
    let report = run_analysis(&full_dataset());
    let comparison = report.remote_salary_comparison.computed().unwrap();

    assert!(comparison.test.p_value < 0.05);
    assert!(comparison.test.conclusion.is_significant());

    assert_eq!(comparison.groups.len(), 2);
    let remote = &comparison.groups[0];
    let onsite = &comparison.groups[1];
    assert_eq!(remote.n, 3);
    assert_eq!(onsite.n, 4);
    assert!(remote.mean > onsite.mean);

    let ci = remote.interval.unwrap();
    assert!(ci.lower <= remote.mean && remote.mean <= ci.upper);
}

#[test]
fn test_company_size_anova_groups_in_domain_order() {
    let report = run_analysis(&full_dataset());
    let section = report.company_size_comparison.computed().unwrap();

    let labels: Vec<&str> = section.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Small", "Medium", "Large"]);
    assert!(section.anova.p_value < 0.05);
    assert!(section.anova.conclusion.is_significant());
}

#[test]
fn test_automation_risk_groups_in_domain_order() {
    let report = run_analysis(&full_dataset());
    let groups = report.automation_risk_salary.computed().unwrap();

    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Low", "Medium", "High"]);

    // Low-risk postings in the fixture pay the most, high-risk the least
    assert_eq!(groups[0].n, 3);
    assert_eq!(groups[1].n, 2);
    assert_eq!(groups[2].n, 2);
    assert!(groups[0].mean > groups[1].mean);
    assert!(groups[1].mean > groups[2].mean);

    let ci = groups[0].interval.unwrap();
    assert!(ci.lower <= groups[0].mean && groups[0].mean <= ci.upper);
}

#[test]
fn test_missing_automation_risk_column_skips_section() {
    let dataset = Dataset::new(
        full_dataset().records().to_vec(),
        Column::ALL
            .into_iter()
            .filter(|c| *c != Column::AutomationRisk),
    );

    let report = run_analysis(&dataset);
    assert!(matches!(
        report.automation_risk_salary,
        SectionResult::Skipped(SkipReason::MissingColumn(_))
    ));
    assert!(report.salary_stats.is_computed());
    assert!(report.company_size_comparison.is_computed());
}

#[test]
fn test_missing_salary_column_skips_only_dependent_sections() {
    let records = full_dataset().records().to_vec();
    let dataset = Dataset::new(
        records,
        Column::ALL.into_iter().filter(|c| *c != Column::SalaryUsd),
    );

    let report = run_analysis(&dataset);
    assert!(matches!(
        report.salary_stats,
        SectionResult::Skipped(SkipReason::MissingColumn(_))
    ));
    assert!(matches!(
        report.remote_salary_comparison,
        SectionResult::Skipped(SkipReason::MissingColumn(_))
    ));
    assert!(matches!(
        report.company_size_comparison,
        SectionResult::Skipped(SkipReason::MissingColumn(_))
    ));
    assert!(matches!(
        report.automation_risk_salary,
        SectionResult::Skipped(SkipReason::MissingColumn(_))
    ));

    // Sections not touching salary still compute
    assert!(report.growth_job_titles.is_computed());
    assert!(report.adoption_growth_crosstab.is_computed());
    assert!(report.growth_skills.is_computed());
}

#[test]
fn test_undersized_groups_skip_tests_but_not_descriptives() {
    use CompanySize::{Large, Medium, Small};
    use JobGrowthProjection::Growth;
    use RemoteFriendly::{No, Yes};

    // Only one on-site record and one record per company size but Medium
    let dataset = Dataset::new(
        vec![
            record("AI Researcher", "Berlin", Yes, Growth, Medium, 95_000.0),
            record("Data Engineer", "London", Yes, Growth, Medium, 64_000.0),
            record("Analyst", "Oslo", No, Growth, Small, 41_000.0),
            record("Analyst", "Oslo", Yes, Growth, Large, 88_000.0),
        ],
        Column::ALL,
    );

    let report = run_analysis(&dataset);
    assert!(report.salary_stats.is_computed());
    assert!(matches!(
        report.remote_salary_comparison,
        SectionResult::Skipped(SkipReason::InsufficientData(_))
    ));
    assert!(matches!(
        report.company_size_comparison,
        SectionResult::Skipped(SkipReason::InsufficientData(_))
    ));
}

#[test]
fn test_summary_renders_all_sections() {
    let report = run_analysis(&full_dataset());
    let summary = report.summary();

    assert!(summary.contains("Records: 7"));
    assert!(summary.contains("Mean:"));
    assert!(summary.contains("Welch t-test"));
    assert!(summary.contains("One-way ANOVA"));
    assert!(summary.contains("reject H0"));
    assert!(summary.contains("Salary by automation risk:"));
}

#[test]
fn test_summary_reports_skips() {
    let dataset = Dataset::new(full_dataset().records().to_vec(), [Column::JobTitle]);
    let summary = run_analysis(&dataset).summary();
    assert!(summary.contains("skipped"));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_analysis(&full_dataset());
    let json = report.to_json().unwrap();
    assert!(json.contains("\"record_count\": 7"));
    assert!(json.contains("\"salary_stats\""));
}
