//! HTML document renderer — interpolates the final sections into a fixed
//! template with embedded styling.
//!
//! NOTE: interpolated text (user input and model output) is NOT escaped
//! before insertion. This matches the upstream behavior for well-formed
//! inputs but is a markup-injection gap; see DESIGN.md.

use crate::resume::extract::SectionSet;

/// Builds the complete styled HTML document for PDF conversion.
pub fn render_html(name: &str, contact: &str, sections: &SectionSet) -> String {
    let experience_items: String = sections
        .experience
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    let skills_items: String = sections
        .skills
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();

    format!(
        r#"<html>
<head>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 30px; }}
        h1 {{ text-align: center; color: #333; margin-bottom: 10px; }}
        .contact {{ text-align: center; margin-bottom: 20px; color: #555; }}
        h2 {{ color: #444; border-bottom: 1px solid #ddd; padding-bottom: 5px; margin-top: 20px; margin-bottom: 10px; }}
        ul {{ margin: 10px 0; padding-left: 20px; list-style-type: disc; }}
        li {{ margin-bottom: 5px; line-height: 1.5; }}
        p {{ margin: 5px 0; line-height: 1.5; }}
        a {{ color: #007bff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
    </style>
</head>
<body>
    <h1>{name}</h1>
    <div class="contact">
        <p><a href="mailto:{contact}">{contact}</a></p>
    </div>

    <h2>Summary</h2>
    <p>{summary}</p>

    <h2>Experience</h2>
    <ul>
        {experience_items}
    </ul>

    <h2>Education</h2>
    <p>{education}</p>

    <h2>Skills</h2>
    <ul>
        {skills_items}
    </ul>
</body>
</html>
"#,
        name = name,
        contact = contact,
        summary = sections.summary.trim(),
        experience_items = experience_items,
        education = sections.education.trim(),
        skills_items = skills_items,
    )
}
