//! Paragraph layout of `word/document.xml`
//!
//! The scan records byte offsets into the XML string so edits can be spliced
//! in without re-serializing anything the document already contains.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::application::ports::DocumentError;

/// One `<w:p>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Offset of the opening `<`
    pub start: usize,
    /// Offset just past the closing `>`
    pub end: usize,
    /// Visible text; tabs and breaks become `\t` and `\n`
    pub text: String,
    pub in_table: bool,
    /// Inside `mc:Fallback`, a legacy duplicate of content Word actually renders
    pub in_fallback: bool,
}

impl Paragraph {
    fn open(start: usize, in_table: bool, in_fallback: bool) -> Self {
        Self {
            start,
            end: start,
            text: String::new(),
            in_table,
            in_fallback,
        }
    }
}

/// Paragraphs in document order plus the body insertion point
#[derive(Debug, Clone)]
pub struct BodyLayout {
    pub paragraphs: Vec<Paragraph>,
    /// Where body-level content can be appended: before the final `w:sectPr`,
    /// or before `</w:body>` when there is none
    pub body_end: usize,
}

impl BodyLayout {
    /// Paragraphs that Word renders
    pub fn visible(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(|p| !p.in_fallback)
    }
}

/// Scan the main document XML.
pub fn scan_body(xml: &str) -> Result<BodyLayout, DocumentError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut open: Vec<Paragraph> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut table_depth = 0usize;
    let mut fallback_depth = 0usize;
    let mut in_text = false;
    let mut section_start = None;
    let mut body_close = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DocumentError::MalformedXml(e.to_string()))?;
        let end = reader.buffer_position();

        match event {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                match name.as_slice() {
                    b"w:p" => open.push(Paragraph::open(
                        tag_start(xml, end),
                        table_depth > 0,
                        fallback_depth > 0,
                    )),
                    b"w:tbl" => table_depth += 1,
                    b"mc:Fallback" => fallback_depth += 1,
                    b"w:t" => in_text = true,
                    b"w:sectPr" if parent_is_body(&stack) => section_start = Some(tag_start(xml, end)),
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => {
                    let mut paragraph =
                        Paragraph::open(tag_start(xml, end), table_depth > 0, fallback_depth > 0);
                    paragraph.end = end;
                    paragraphs.push(paragraph);
                }
                b"w:tab" => push_text(&mut open, "\t"),
                b"w:br" | b"w:cr" => push_text(&mut open, "\n"),
                b"w:sectPr" if parent_is_body(&stack) => section_start = Some(tag_start(xml, end)),
                _ => {}
            },
            Event::End(e) => {
                match e.name().as_ref() {
                    b"w:p" => {
                        if let Some(mut paragraph) = open.pop() {
                            paragraph.end = end;
                            paragraphs.push(paragraph);
                        }
                    }
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"mc:Fallback" => fallback_depth = fallback_depth.saturating_sub(1),
                    b"w:t" => in_text = false,
                    b"w:body" => body_close = Some(tag_start(xml, end)),
                    _ => {}
                }
                stack.pop();
            }
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| DocumentError::MalformedXml(e.to_string()))?;
                push_text(&mut open, &text);
            }
            Event::CData(c) if in_text => {
                push_text(&mut open, &String::from_utf8_lossy(&c));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    // Nested paragraphs (text boxes) close before their host.
    paragraphs.sort_by_key(|p| p.start);

    let body_end = section_start
        .or(body_close)
        .ok_or_else(|| DocumentError::MissingPart("w:body".to_string()))?;

    Ok(BodyLayout {
        paragraphs,
        body_end,
    })
}

/// Offset of the `<` that opened the tag ending at `end`
fn tag_start(xml: &str, end: usize) -> usize {
    xml[..end].rfind('<').unwrap_or(0)
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().map(|name| name.as_slice() == b"w:body").unwrap_or(false)
}

fn push_text(open: &mut [Paragraph], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.text.push_str(text);
    }
}
