// Document rendering: SectionSet → styled HTML → PDF bytes.

pub mod html;
pub mod pdf;
