// The single completion prompt for resume generation.
// Placeholders ({name}, {contact}, {education}, {experience}, {skills}) are
// substituted by `build_prompt` before sending.

use crate::resume::input::ResumeInput;

/// Highly directive prompt: demand a rewrite rather than verbatim
/// reproduction, with quantified achievements even when the input has none,
/// and pin the four-section output structure by name so the extractor has
/// headers to find.
pub const RESUME_PROMPT_TEMPLATE: &str = "Generate a professional resume for a data analyst role. \
Rewrite every section with enhanced clarity, professionalism, and impact. \
Add quantifiable achievements (e.g., 15% improvement, 2 years) even if not in the input. \
Do not reproduce input verbatim; rephrase all content. Use these details:\n\
- Name: {name}\n\
- Contact: {contact}\n\
- Education: {education}\n\
- Experience: {experience}\n\
- Skills: {skills}\n\
Structure the resume as:\n\
- Summary: A compelling overview of skills and achievements.\n\
- Experience: Rewrite each job entry and bullet point with professional language and added value (e.g., metrics, outcomes).\n\
- Education: Provide the degree and institution (omit placeholders).\n\
- Skills: Rewrite all skills into professional bullet points, ensuring all input skills are included and relevant to data analysis.\n\
Ensure the output is complete, with no missing sections or truncated content.";

/// Pure function from validated input to the completion prompt.
pub fn build_prompt(input: &ResumeInput) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{name}", &input.name)
        .replace("{contact}", &input.contact)
        .replace("{education}", &input.education)
        .replace("{experience}", &input.experience)
        .replace("{skills}", &input.skills)
}
