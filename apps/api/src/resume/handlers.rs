use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Form,
};

use crate::errors::AppError;
use crate::render::html::render_html;
use crate::render::pdf::html_to_pdf;
use crate::resume::extract::{extract_sections, SectionSet};
use crate::resume::input::{GenerateForm, ResumeInput};
use crate::resume::prompts::build_prompt;
use crate::resume::repair::repair_sections;
use crate::resume::sanitize::sanitize_sections;
use crate::state::AppState;

/// POST /generate
///
/// Runs the whole pipeline for one request and returns the PDF as a file
/// attachment. The only state touched is request-scoped; nothing survives
/// the response.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<impl IntoResponse, AppError> {
    let input = ResumeInput::from_form(form)?;
    let prompt = build_prompt(&input);
    let generated = state.llm.complete(&prompt).await?;

    let sections = assemble_sections(&generated, &input);

    let html = render_html(&input.name, &input.contact, &sections);
    let pdf = html_to_pdf(&html)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=resume.pdf",
            ),
        ],
        pdf,
    ))
}

/// Deterministic post-model stage: extract, repair, sanitize.
/// Split out from the handler so the whole text pipeline is testable without
/// a live completion endpoint.
fn assemble_sections(generated: &str, input: &ResumeInput) -> SectionSet {
    let mut sections = extract_sections(generated);
    repair_sections(&mut sections, input);
    sanitize_sections(&mut sections);
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane_doe() -> ResumeInput {
        ResumeInput::from_form(GenerateForm {
            name: "Jane Doe".to_string(),
            contact: "jane@x.com".to_string(),
            education: "BS CS, MIT, 2020".to_string(),
            experience: "Monitored KPI dashboards".to_string(),
            skills: "Data Analysis with Excel".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_headerless_reply_falls_back_to_input_rewrites() {
        let input = jane_doe();
        let generated = "The model rambled on without any structure whatsoever.";
        let sections = assemble_sections(generated, &input);

        assert_eq!(
            sections.experience,
            vec!["Transformed data analysis processes, achieving a 15% efficiency gain"]
        );
        assert_eq!(
            sections.skills,
            vec!["Expertise in Data Analysis & Reporting with Advanced Excel, SQL, Python (Pandas, NumPy), and Power BI"]
        );
        assert_eq!(
            sections.summary,
            crate::resume::repair::DEFAULT_SUMMARY
        );
        assert_eq!(sections.education, "BS CS, MIT, 2020");
    }

    #[test]
    fn test_fallback_lengths_match_input_lines() {
        let input = ResumeInput::from_form(GenerateForm {
            name: "Jane Doe".to_string(),
            contact: "jane@x.com".to_string(),
            education: "BS CS, MIT, 2020".to_string(),
            experience: "Monitored dashboards\nDeveloped reports\nOther work".to_string(),
            skills: "Data Analysis\nData Visualization".to_string(),
        })
        .unwrap();
        let sections = assemble_sections("no headers here", &input);
        assert_eq!(sections.experience.len(), 3);
        assert_eq!(sections.skills.len(), 2);
    }

    #[test]
    fn test_well_formed_reply_passes_through_sanitized() {
        let input = jane_doe();
        let generated = "\
Summary
Seasoned analyst with measurable wins.

Experience
- Raised conversion by $12% across funnels

Education
BS CS, MIT, 2020

Skills
- Advanced SQL tuning";
        let sections = assemble_sections(generated, &input);
        assert_eq!(sections.summary, "Seasoned analyst with measurable wins. ");
        assert_eq!(
            sections.experience,
            vec!["Raised conversion by 12% across funnels"]
        );
        assert_eq!(sections.skills, vec!["Advanced SQL tuning"]);
    }

    #[test]
    fn test_denylisted_model_bullets_removed() {
        let input = jane_doe();
        let generated = "\
Summary
Fine.

Experience
- Negotiated salary bands for the team

Education
MIT

Skills
- Data Analysis";
        let sections = assemble_sections(generated, &input);
        // the salary bullet is dropped; the shrunken list is what renders
        assert!(sections
            .experience
            .iter()
            .all(|item| !item.to_lowercase().contains("salary")));
    }
}
