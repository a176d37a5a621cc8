//! Finding where generated content belongs

use super::scan::Paragraph;

/// Longer paragraphs are body text that merely mentions the keyword
pub const MAX_HEADING_CHARS: usize = 120;

pub const OBJECTIVES_HEADINGS: &[&str] = &["MỤC TIÊU"];

pub const MATERIALS_HEADINGS: &[&str] = &["THIẾT BỊ DẠY HỌC", "HỌC LIỆU", "ĐỒ DÙNG DẠY HỌC"];

const QUOTES: &[char] = &['"', '\'', '“', '”', '‘', '’', '«', '»', '`'];

/// First short paragraph whose upper-cased text contains one of `keywords`.
pub fn find_heading<'a, I>(paragraphs: I, keywords: &[&str]) -> Option<&'a Paragraph>
where
    I: IntoIterator<Item = &'a Paragraph>,
{
    paragraphs.into_iter().find(|p| {
        let text = p.text.trim();
        if text.is_empty() || text.chars().count() > MAX_HEADING_CHARS {
            return false;
        }
        let upper = text.to_uppercase();
        keywords.iter().any(|keyword| upper.contains(keyword))
    })
}

/// Paragraph containing the anchor text.
///
/// An exact substring match anywhere in the document wins over a match that
/// only succeeds after collapsing whitespace and ignoring case. Within each
/// pass the first paragraph in document order wins.
pub fn find_anchor<'a>(paragraphs: &[&'a Paragraph], anchor: &str) -> Option<&'a Paragraph> {
    let anchor = clean_anchor(anchor);
    if anchor.is_empty() {
        return None;
    }

    if let Some(found) = paragraphs.iter().find(|p| p.text.contains(anchor.as_str())) {
        return Some(*found);
    }

    let wanted = normalize(&anchor);
    paragraphs
        .iter()
        .find(|p| normalize(&p.text).contains(wanted.as_str()))
        .copied()
}

/// Strip the wrapping the model tends to add around quoted text.
pub fn clean_anchor(anchor: &str) -> String {
    let mut text = anchor.trim();
    loop {
        let before = text;
        text = text.trim_matches(QUOTES).trim();
        text = text
            .strip_suffix("...")
            .or_else(|| text.strip_suffix('…'))
            .unwrap_or(text)
            .trim_end();
        if text == before {
            return text.to_string();
        }
    }
}

/// Collapse whitespace runs (including non-breaking spaces) and lower-case.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
