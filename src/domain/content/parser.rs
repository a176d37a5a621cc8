//! Lenient decoder for the delimited model response
//!
//! The response carries four optional sections, each wrapped in a BEGIN/END
//! marker pair (see [`super::markers`]). The first BEGIN and the nearest END
//! after it bound a section. Anything missing or malformed degrades to an
//! empty field; decoding never fails.

use std::sync::LazyLock;

use regex::Regex;

use super::generated::{ActivityInsertion, GeneratedContent};
use super::markers::{
    ACTIVITIES_BEGIN, ACTIVITIES_END, ACTIVITY_SEPARATOR, ANCHOR_FIELD, APPENDIX_BEGIN,
    APPENDIX_END, CONTENT_FIELD, MATERIALS_BEGIN, MATERIALS_END, OBJECTIVES_BEGIN,
    OBJECTIVES_END,
};

fn section_regex(begin: &str, end: &str) -> Regex {
    Regex::new(&format!(
        "(?s){}(.*?){}",
        regex::escape(begin),
        regex::escape(end)
    ))
    .unwrap()
}

static OBJECTIVES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_regex(OBJECTIVES_BEGIN, OBJECTIVES_END));

static MATERIALS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_regex(MATERIALS_BEGIN, MATERIALS_END));

static APPENDIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_regex(APPENDIX_BEGIN, APPENDIX_END));

static ACTIVITIES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_regex(ACTIVITIES_BEGIN, ACTIVITIES_END));

// Anchor runs up to the first CONTENT: field or the end of the record.
static ANCHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s){}\s*(.*?)(?:{}|\z)",
        regex::escape(ANCHOR_FIELD),
        regex::escape(CONTENT_FIELD)
    ))
    .unwrap()
});

static CONTENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s){}\s*(.*)\z", regex::escape(CONTENT_FIELD))).unwrap()
});

/// Decode a raw model response. Total: never fails, never panics.
pub fn parse(raw: &str) -> GeneratedContent {
    let activities = capture_section(&ACTIVITIES_REGEX, raw)
        .map(parse_activities)
        .unwrap_or_default();

    GeneratedContent {
        objectives_addition: section_text(&OBJECTIVES_REGEX, raw),
        materials_addition: section_text(&MATERIALS_REGEX, raw),
        activities,
        appendix_table: section_text(&APPENDIX_REGEX, raw),
    }
}

fn capture_section<'a>(regex: &Regex, raw: &'a str) -> Option<&'a str> {
    regex
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn section_text(regex: &Regex, raw: &str) -> String {
    capture_section(regex, raw)
        .map(|body| body.trim().to_string())
        .unwrap_or_default()
}

fn parse_activities(block: &str) -> Vec<ActivityInsertion> {
    block
        .split(ACTIVITY_SEPARATOR)
        .filter_map(parse_activity)
        .collect()
}

/// A record needs a non-empty anchor and a non-empty content; otherwise it is dropped.
fn parse_activity(record: &str) -> Option<ActivityInsertion> {
    let anchor = capture_section(&ANCHOR_REGEX, record)?.trim();
    let content = capture_section(&CONTENT_REGEX, record)?.trim();

    if anchor.is_empty() || content.is_empty() {
        return None;
    }

    Some(ActivityInsertion::new(anchor, content))
}
