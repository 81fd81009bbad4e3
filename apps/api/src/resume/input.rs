//! Input collector — trims and validates the five required form fields and
//! derives the per-line views used by the repair heuristics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;

/// Raw `POST /generate` form payload.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub name: String,
    pub contact: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

/// Validated request-scoped input. All five fields are non-empty after
/// trimming; `education` has already had placeholder artifacts removed.
#[derive(Debug, Clone)]
pub struct ResumeInput {
    pub name: String,
    pub contact: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

/// Leading bullet-like artifact on pasted skill lines (". . Data Analysis").
static SKILL_BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.\s*\.\s*").unwrap());

impl ResumeInput {
    /// Trims every field, cleans the education text, and rejects the request
    /// if any field ends up empty.
    pub fn from_form(form: GenerateForm) -> Result<Self, AppError> {
        let input = ResumeInput {
            name: form.name.trim().to_string(),
            contact: form.contact.trim().to_string(),
            education: clean_education(form.education.trim()),
            experience: form.experience.trim().to_string(),
            skills: form.skills.trim().to_string(),
        };

        let all_present = !input.name.is_empty()
            && !input.contact.is_empty()
            && !input.education.is_empty()
            && !input.experience.is_empty()
            && !input.skills.is_empty();

        if !all_present {
            return Err(AppError::Validation);
        }
        Ok(input)
    }

    /// Non-empty trimmed lines of the raw experience field.
    pub fn experience_lines(&self) -> Vec<String> {
        self.experience
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Non-empty trimmed lines of the raw skills field, with the bullet-like
    /// prefix stripped.
    pub fn skill_lines(&self) -> Vec<String> {
        self.skills
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| SKILL_BULLET_RE.replace(line, "").into_owned())
            .collect()
    }
}

/// Removes known paste artifacts from the education field: a mis-rendered
/// "AI" abbreviation and two bracketed template placeholders. Idempotent —
/// cleaning already-clean text changes nothing.
pub fn clean_education(text: &str) -> String {
    text.replace(r"$\mathrm{Al}$", "AI")
        .replace("[Name of University]", "")
        .replace("[Graduation Date]", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> GenerateForm {
        GenerateForm {
            name: "Jane Doe".to_string(),
            contact: "jane@x.com".to_string(),
            education: "BS CS, MIT, 2020".to_string(),
            experience: "Monitored KPI dashboards".to_string(),
            skills: "Data Analysis with Excel".to_string(),
        }
    }

    #[test]
    fn test_all_fields_present_passes() {
        assert!(ResumeInput::from_form(full_form()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = full_form();
        form.name = "   ".to_string();
        assert!(matches!(
            ResumeInput::from_form(form),
            Err(AppError::Validation)
        ));
    }

    #[test]
    fn test_blank_skills_rejected() {
        let mut form = full_form();
        form.skills = "\n\n".to_string();
        assert!(matches!(
            ResumeInput::from_form(form),
            Err(AppError::Validation)
        ));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = full_form();
        form.name = "  Jane Doe  ".to_string();
        let input = ResumeInput::from_form(form).unwrap();
        assert_eq!(input.name, "Jane Doe");
    }

    #[test]
    fn test_education_placeholders_removed() {
        let cleaned = clean_education(r"BS in $\mathrm{Al}$, [Name of University], [Graduation Date]");
        assert_eq!(cleaned, "BS in AI, , ");
    }

    #[test]
    fn test_education_cleanup_is_idempotent() {
        let once = clean_education(r"MS $\mathrm{Al}$ [Name of University]");
        let twice = clean_education(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_experience_lines_drop_blanks() {
        let mut form = full_form();
        form.experience = "Monitored dashboards\n\n  Developed reports  \n".to_string();
        let input = ResumeInput::from_form(form).unwrap();
        assert_eq!(
            input.experience_lines(),
            vec!["Monitored dashboards", "Developed reports"]
        );
    }

    #[test]
    fn test_skill_lines_strip_bullet_prefix() {
        let mut form = full_form();
        form.skills = ". . Data Analysis\n. .Data Visualization\nDatabase Management".to_string();
        let input = ResumeInput::from_form(form).unwrap();
        assert_eq!(
            input.skill_lines(),
            vec!["Data Analysis", "Data Visualization", "Database Management"]
        );
    }
}
