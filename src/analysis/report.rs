//! Plain-text and JSON rendering of an analysis report

use itertools::Itertools;

use crate::error::Result;
use crate::stats::DescriptiveStats;

use super::{
    AnalysisReport, AnovaSection, ComparisonResult, CrossTab, GroupEstimate, SectionResult,
};

impl AnalysisReport {
    /// Serialize the full report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Generate a human-readable summary of every section
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("AI Job Market Analysis\n");
        out.push_str(&format!("  Records: {}\n\n", self.record_count));

        out.push_str("Salary (USD):\n");
        render_section(&mut out, &self.salary_stats, render_salary_stats);

        out.push_str("\nTop job titles in growth-projected postings:\n");
        render_section(&mut out, &self.growth_job_titles, |out, entries| {
            render_counts(out, entries);
        });

        out.push_str("\nTop locations by mean salary:\n");
        render_section(&mut out, &self.top_locations_by_salary, |out, entries| {
            for (label, mean) in entries {
                out.push_str(&format!("  {label}: ${mean:.2}\n"));
            }
        });

        out.push_str("\nAI adoption level vs. job growth projection:\n");
        render_section(&mut out, &self.adoption_growth_crosstab, render_crosstab);

        out.push_str("\nTop skills in growth-projected postings:\n");
        render_section(&mut out, &self.growth_skills, |out, entries| {
            render_counts(out, entries);
        });

        out.push_str("\nSalary by work modality (remote vs. on-site):\n");
        render_section(&mut out, &self.remote_salary_comparison, render_comparison);

        out.push_str("\nSalary by company size:\n");
        render_section(&mut out, &self.company_size_comparison, render_anova);

        out.push_str("\nSalary by automation risk:\n");
        render_section(&mut out, &self.automation_risk_salary, |out, groups| {
            for group in groups {
                render_group(out, group);
            }
        });

        out
    }
}

fn render_section<T>(
    out: &mut String,
    section: &SectionResult<T>,
    render: impl FnOnce(&mut String, &T),
) {
    match section {
        SectionResult::Computed(value) => render(out, value),
        SectionResult::Skipped(reason) => {
            out.push_str(&format!("  skipped ({reason})\n"));
        }
    }
}

fn render_salary_stats(out: &mut String, stats: &DescriptiveStats) {
    out.push_str(&format!("  Mean:    ${:.2}\n", stats.mean));
    out.push_str(&format!("  Median:  ${:.2}\n", stats.median));
    out.push_str(&format!("  Std dev: ${:.2}\n", stats.std_dev));
    out.push_str(&format!("  Min:     ${:.2}\n", stats.min));
    out.push_str(&format!("  Max:     ${:.2}\n", stats.max));
}

fn render_counts(out: &mut String, entries: &[(String, usize)]) {
    for (label, count) in entries {
        out.push_str(&format!("  {label}: {count}\n"));
    }
}

fn render_crosstab(out: &mut String, table: &CrossTab) {
    let header = table.col_labels.iter().join(" | ");
    out.push_str(&format!("  {:<8} | {header}\n", ""));
    for (label, row) in table.row_labels.iter().zip(&table.counts) {
        let cells = row
            .iter()
            .zip(&table.col_labels)
            .map(|(count, col)| format!("{count:>width$}", width = col.len()))
            .join(" | ");
        out.push_str(&format!("  {label:<8} | {cells}\n"));
    }
    out.push_str(&format!("  Total: {}\n", table.total));
}

fn render_group(out: &mut String, group: &GroupEstimate) {
    match &group.interval {
        Some(ci) => out.push_str(&format!(
            "  {} (n={}): mean ${:.2}, {:.0}% CI ${:.2} to ${:.2}\n",
            group.label,
            group.n,
            group.mean,
            ci.level * 100.0,
            ci.lower,
            ci.upper
        )),
        None => out.push_str(&format!("  {} (n={}): too few observations\n", group.label, group.n)),
    }
}

fn render_comparison(out: &mut String, comparison: &ComparisonResult) {
    for group in &comparison.groups {
        render_group(out, group);
    }
    out.push_str(&format!(
        "  Welch t-test: t = {:.4}, p = {:.4}\n  Conclusion: {}\n",
        comparison.test.statistic, comparison.test.p_value, comparison.test.conclusion
    ));
}

fn render_anova(out: &mut String, section: &AnovaSection) {
    for group in &section.groups {
        render_group(out, group);
    }
    out.push_str(&format!(
        "  One-way ANOVA: F = {:.4}, p = {:.4}\n  Conclusion: {}\n",
        section.anova.f_statistic, section.anova.p_value, section.anova.conclusion
    ));
}
