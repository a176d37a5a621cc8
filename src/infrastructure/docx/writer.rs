//! WordprocessingML fragments for inserted content
//!
//! Every run carries the highlight color so reviewers can tell additions
//! apart from the original lesson plan.

use quick_xml::escape::escape;

use crate::domain::content::AppendixTable;
use crate::domain::document::HighlightColor;

/// Total table width in twentieths of a point (A4 text area, normal margins)
const TABLE_WIDTH_TWIPS: usize = 9000;

/// Shown above the appendix table when the model gave no title
pub const DEFAULT_APPENDIX_TITLE: &str = "PHỤ LỤC: NĂNG LỰC SỐ ĐƯỢC TÍCH HỢP TRONG BÀI HỌC";

const BORDER_EDGES: [&str; 6] = ["top", "left", "bottom", "right", "insideH", "insideV"];

/// One paragraph per non-empty line; `**bold**` spans become bold runs.
pub fn paragraphs_xml(text: &str, color: &HighlightColor) -> String {
    text.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(|line| paragraph_xml(&line, color))
        .collect()
}

/// A single paragraph with inline bold markup
pub fn paragraph_xml(line: &str, color: &HighlightColor) -> String {
    let runs: String = inline_spans(line)
        .into_iter()
        .map(|(text, bold)| run_xml(text, color, bold))
        .collect();
    format!("<w:p>{}</w:p>", runs)
}

/// A paragraph that is bold throughout
pub fn heading_xml(text: &str, color: &HighlightColor) -> String {
    format!("<w:p>{}</w:p>", run_xml(&text.replace("**", ""), color, true))
}

/// The appendix: title, bordered table, any trailing prose, then a spacer.
/// Text without table rows is written as plain paragraphs.
pub fn appendix_xml(text: &str, color: &HighlightColor) -> String {
    let table = AppendixTable::parse(text);
    if !table.has_rows() {
        return format!("{}{}", paragraphs_xml(text, color), empty_paragraph());
    }

    let mut xml = String::new();
    if table.title_lines.is_empty() {
        xml.push_str(&heading_xml(DEFAULT_APPENDIX_TITLE, color));
    } else {
        for line in &table.title_lines {
            xml.push_str(&heading_xml(line, color));
        }
    }

    xml.push_str(&table_xml(&table, color));

    for line in &table.trailing_lines {
        xml.push_str(&paragraph_xml(&clean_line(line), color));
    }
    xml.push_str(empty_paragraph());
    xml
}

fn table_xml(table: &AppendixTable, color: &HighlightColor) -> String {
    let columns = table.column_count().max(1);
    let column_width = TABLE_WIDTH_TWIPS / columns;

    let borders: String = BORDER_EDGES
        .iter()
        .map(|edge| {
            format!(
                r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
                edge
            )
        })
        .collect();

    let mut xml = format!(
        r#"<w:tbl><w:tblPr><w:tblW w:w="5000" w:type="pct"/><w:tblBorders>{}</w:tblBorders><w:tblLook w:val="04A0"/></w:tblPr><w:tblGrid>"#,
        borders
    );
    for _ in 0..columns {
        xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, column_width));
    }
    xml.push_str("</w:tblGrid>");

    for (index, row) in table.rows.iter().enumerate() {
        let header = index == 0;
        xml.push_str("<w:tr>");
        if header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        for cell in row {
            xml.push_str(&cell_xml(cell, column_width, color, header));
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
    xml
}

fn cell_xml(cell: &str, width: usize, color: &HighlightColor, bold: bool) -> String {
    let paragraphs: String = split_cell_lines(cell)
        .into_iter()
        .map(|line| {
            if bold {
                heading_xml(line, color)
            } else {
                paragraph_xml(line, color)
            }
        })
        .collect();

    // A cell must hold at least one paragraph.
    let paragraphs = if paragraphs.is_empty() {
        empty_paragraph().to_string()
    } else {
        paragraphs
    };

    format!(
        r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr>{}</w:tc>"#,
        width, paragraphs
    )
}

/// Models write line breaks inside cells as `<br>`.
fn split_cell_lines(cell: &str) -> Vec<&str> {
    cell.split("<br>")
        .flat_map(|part| part.split("<br/>"))
        .flat_map(|part| part.split("<br />"))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn run_xml(text: &str, color: &HighlightColor, bold: bool) -> String {
    let bold = if bold { "<w:b/>" } else { "" };
    format!(
        r#"<w:r><w:rPr>{}<w:color w:val="{}"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
        bold,
        color.as_str(),
        escape(text)
    )
}

fn empty_paragraph() -> &'static str {
    "<w:p/>"
}

/// Strip markdown the document has no use for: heading hashes and `* ` bullets.
fn clean_line(line: &str) -> String {
    let line = line.trim();
    let line = line.trim_start_matches('#').trim_start();
    match line.strip_prefix("* ") {
        Some(rest) => format!("- {}", rest),
        None => line.to_string(),
    }
}

/// Split on `**` markers. Odd segments are bold; empty segments are dropped.
/// An unmatched trailing `**` leaves the rest plain.
fn inline_spans(line: &str) -> Vec<(&str, bool)> {
    let segments: Vec<&str> = line.split("**").collect();
    let balanced = segments.len() % 2 == 1;

    segments
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(index, text)| {
            let last = index == segments.len() - 1;
            let bold = index % 2 == 1 && (balanced || !last);
            (*text, bold)
        })
        .collect()
}
