//! Content sanitizer — deterministic cleanup of the bullet sections.
//!
//! Two passes over Experience and Skills only: strip a currency-symbol
//! artifact the model sometimes puts before percentages ("$15%" → "15%"),
//! then drop lines containing denylisted terms.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::extract::SectionSet;

/// A literal `$` directly before digits-and-percent. The `$` is a rendering
/// artifact, not a currency amount.
static CURRENCY_PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+%)").unwrap());

/// Terms that mark a line as irrelevant in either bullet section.
/// Matched case-insensitively as substrings.
const SHARED_DENYLIST: &[&str] = &[
    "salary",
    "income",
    "benefits",
    "intelligent analytics",
    "talwar",
];

/// Additional terms dropped from Skills only.
const SKILLS_ONLY_DENYLIST: &[&str] = &["professions", "career advancement"];

fn strip_currency_prefix(line: &str) -> String {
    CURRENCY_PERCENT_RE.replace_all(line, "$1").into_owned()
}

fn is_denied(line: &str, extra: &[&str]) -> bool {
    let lower = line.to_lowercase();
    SHARED_DENYLIST
        .iter()
        .chain(extra.iter())
        .any(|term| lower.contains(term))
}

/// Cleans the Experience and Skills lists in place. Summary and Education
/// are left untouched.
pub fn sanitize_sections(sections: &mut SectionSet) {
    sections.experience = std::mem::take(&mut sections.experience)
        .into_iter()
        .map(|item| strip_currency_prefix(&item))
        .filter(|item| !is_denied(item, &[]))
        .collect();

    sections.skills = std::mem::take(&mut sections.skills)
        .into_iter()
        .map(|item| strip_currency_prefix(&item))
        .filter(|item| !is_denied(item, SKILLS_ONLY_DENYLIST))
        .collect();
}
