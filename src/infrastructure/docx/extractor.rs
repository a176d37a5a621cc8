//! DOCX text extraction

use crate::application::ports::{DocumentError, TextExtractor};

use super::package::DocxPackage;
use super::scan::scan_body;

/// Plain text of a `.docx`, one line per paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocxTextExtractor {
    fn extract_text(&self, document: &[u8]) -> Result<String, DocumentError> {
        let package = DocxPackage::open(document)?;
        let layout = scan_body(package.document_xml())?;

        let mut lines: Vec<&str> = Vec::new();
        for paragraph in layout.visible() {
            for line in paragraph.text.split('\n') {
                let line = line.trim_end();
                // Collapse runs of blank lines into one.
                if line.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
                    continue;
                }
                lines.push(line);
            }
        }

        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::docx::fixtures::{build_docx, paragraph, wrap_body, SECT_PR};

    fn extract(body: &str) -> String {
        let bytes = build_docx(&wrap_body(body), &[]);
        DocxTextExtractor::new().extract_text(&bytes).unwrap()
    }

    #[test]
    fn one_line_per_paragraph() {
        let text = extract(&format!(
            "{}{}{}",
            paragraph("BÀI 5: PHÂN SỐ"),
            paragraph("I. MỤC TIÊU"),
            SECT_PR
        ));
        assert_eq!(text, "BÀI 5: PHÂN SỐ\nI. MỤC TIÊU");
    }

    #[test]
    fn blank_paragraphs_collapse() {
        let text = extract(&format!(
            "<w:p/>{}<w:p/><w:p/><w:p></w:p>{}<w:p/>",
            paragraph("a"),
            paragraph("b")
        ));
        assert_eq!(text, "a\n\nb");
    }

    #[test]
    fn table_cells_become_lines() {
        let text = extract(&format!(
            "<w:tbl><w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr></w:tbl>",
            paragraph("Hoạt động"),
            paragraph("Sản phẩm")
        ));
        assert_eq!(text, "Hoạt động\nSản phẩm");
    }

    #[test]
    fn tabs_and_breaks_are_kept() {
        let text = extract("<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>");
        assert_eq!(text, "a\tb\nc");
    }

    #[test]
    fn fallback_duplicates_are_skipped() {
        let text = extract(
            "<w:p><w:r><mc:AlternateContent><mc:Choice><w:txbxContent>\
             <w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></mc:Choice>\
             <mc:Fallback><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p>\
             </w:txbxContent></mc:Fallback></mc:AlternateContent></w:r></w:p>",
        );
        assert_eq!(text, "Box");
    }

    #[test]
    fn not_a_package() {
        let err = DocxTextExtractor::new().extract_text(b"%PDF-1.7").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPackage(_)));
    }
}
