//! Section extractor — single-pass classifier from free-form model output to
//! the four named resume sections.
//!
//! The model is asked for a fixed structure but nothing guarantees it
//! delivers one. This pass is deliberately simple: scan line by line, switch
//! sections on header keywords, accumulate content. No backtracking, no
//! recovery — output with no recognizable headers yields an empty
//! `SectionSet` and the repair pass takes over.

/// The four resume sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Experience,
    Education,
    Skills,
}

/// Header keywords checked in fixed priority order. First match wins, so a
/// line containing several keywords ("Skills and Experience") always
/// resolves the same way. Matching is case-sensitive substring.
const SECTION_HEADERS: &[(&str, Section)] = &[
    ("Summary", Section::Summary),
    ("Experience", Section::Experience),
    ("Education", Section::Education),
    ("Skills", Section::Skills),
];

/// Structured resume content: two prose sections accumulated as strings, two
/// bullet sections accumulated as ordered lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSet {
    pub summary: String,
    pub experience: Vec<String>,
    pub education: String,
    pub skills: Vec<String>,
}

fn classify_header(line: &str) -> Option<Section> {
    SECTION_HEADERS
        .iter()
        .find(|(keyword, _)| line.contains(keyword))
        .map(|&(_, section)| section)
}

/// Scans the generated text and routes each line into a section.
///
/// Rules:
/// - blank lines are skipped
/// - a line containing a header keyword switches the current section and
///   contributes no content itself
/// - Summary and Education lines are appended with a trailing space
/// - Experience and Skills lines are kept only when they start with `-`,
///   with the marker stripped
/// - lines before the first header are discarded
pub fn extract_sections(text: &str) -> SectionSet {
    let mut sections = SectionSet::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(section) = classify_header(line) {
            current = Some(section);
            continue;
        }

        match current {
            Some(Section::Summary) => {
                sections.summary.push_str(line);
                sections.summary.push(' ');
            }
            Some(Section::Education) => {
                sections.education.push_str(line);
                sections.education.push(' ');
            }
            Some(Section::Experience) => {
                if let Some(rest) = line.strip_prefix('-') {
                    sections.experience.push(rest.trim().to_string());
                }
            }
            Some(Section::Skills) => {
                if let Some(rest) = line.strip_prefix('-') {
                    sections.skills.push(rest.trim().to_string());
                }
            }
            None => {} // no header seen yet
        }
    }

    sections
}
