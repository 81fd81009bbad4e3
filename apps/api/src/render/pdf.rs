//! PDF emitter — converts the rendered HTML string to PDF bytes via printpdf.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument};

use crate::errors::AppError;

/// Converts the HTML document into a PDF byte buffer.
///
/// No images or extra fonts are embedded; the template only uses built-in
/// styling. Layout warnings are logged, not surfaced — the only failure
/// point is HTML parsing in `from_html`; serialization itself is
/// infallible.
pub fn html_to_pdf(html: &str) -> Result<Vec<u8>, AppError> {
    let mut warnings = Vec::new();

    let doc = PdfDocument::from_html(
        html,
        &BTreeMap::new(), // images
        &BTreeMap::new(), // fonts
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| AppError::Render(e.to_string()))?;

    let bytes = doc.save(&Default::default(), &mut warnings);

    if !warnings.is_empty() {
        tracing::debug!("PDF generation produced {} warnings", warnings.len());
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_document_converts_to_pdf_bytes() {
        let html = "<html><body><h1>Jane Doe</h1><p>Summary text</p></body></html>";
        let bytes = html_to_pdf(html).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
