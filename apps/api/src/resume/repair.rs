//! Heuristic repairer — fills sections the extractor left incomplete.
//!
//! Fallback content comes from the ORIGINAL input (never the model output):
//! each original line is passed through a fixed keyword-to-rewrite table,
//! first matching keyword wins, unmatched lines pass through unchanged.

use crate::resume::extract::SectionSet;
use crate::resume::input::ResumeInput;

/// Generic summary used when the extractor found none.
pub const DEFAULT_SUMMARY: &str = "Dynamic Data Analyst with a proven track record in \
leveraging AI and advanced analytics to optimize business performance.";

const EXPERIENCE_REWRITES: &[(&str, &str)] = &[
    (
        "Monitored",
        "Transformed data analysis processes, achieving a 15% efficiency gain",
    ),
    (
        "Developed",
        "Designed automated Power BI dashboards, improving decision-making by 20%",
    ),
    (
        "Integrated",
        "Streamlined data workflows with Python and SQL, reducing processing time by 40%",
    ),
    (
        "Collaborated",
        "Delivered client-focused insights, boosting retention by 30%",
    ),
];

const SKILL_REWRITES: &[(&str, &str)] = &[
    (
        "Data Analysis",
        "Expertise in Data Analysis & Reporting with Advanced Excel, SQL, Python (Pandas, NumPy), and Power BI",
    ),
    (
        "Performance Monitoring",
        "Proficient in Performance Monitoring via KPI tracking, trend analysis, and anomaly detection",
    ),
    (
        "Data Visualization",
        "Skilled in Data Visualization using Power BI dashboards",
    ),
    (
        "Database Management",
        "Competent in Database Management with SQL, SQLite, MySQL, and data integration",
    ),
    (
        "Professional Skills",
        "Strong Professional Skills including communication, time management, and collaboration",
    ),
];

/// Rebuild policy for the bullet sections: trigger when extraction produced
/// nothing, or fewer items than the original input had lines. A line-count
/// proxy, not a content-quality check — kept as a named function so the
/// trigger can change without touching extraction.
pub fn needs_rebuild(extracted: usize, original: usize) -> bool {
    extracted == 0 || extracted < original
}

fn rewrite(line: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .find(|(keyword, _)| line.contains(keyword))
        .map(|&(_, replacement)| replacement.to_string())
        .unwrap_or_else(|| line.to_string())
}

/// Repairs each section independently.
///
/// When the rebuild policy triggers for Experience or Skills, the ENTIRE
/// extracted list is replaced by rewrites of the original lines — extracted
/// model content in that branch is discarded, not merged.
pub fn repair_sections(sections: &mut SectionSet, input: &ResumeInput) {
    if sections.summary.is_empty() {
        sections.summary = DEFAULT_SUMMARY.to_string();
    }

    let experience_lines = input.experience_lines();
    if needs_rebuild(sections.experience.len(), experience_lines.len()) {
        sections.experience = experience_lines
            .iter()
            .map(|line| rewrite(line, EXPERIENCE_REWRITES))
            .collect();
    }

    if sections.education.is_empty() {
        sections.education = input.education.clone();
    }

    let skill_lines = input.skill_lines();
    if needs_rebuild(sections.skills.len(), skill_lines.len()) {
        sections.skills = skill_lines
            .iter()
            .map(|line| rewrite(line, SKILL_REWRITES))
            .collect();
    }
}
