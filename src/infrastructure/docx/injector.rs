//! DOCX injector
//!
//! All edits are insertions at offsets found by the scan. Bytes outside the
//! inserted fragments are copied verbatim, so equations, embedded objects and
//! formatting in the original survive untouched.

use crate::application::ports::{DocumentError, DocumentInjector, InjectionOutcome};
use crate::domain::content::GeneratedContent;
use crate::domain::document::{InjectionOptions, InjectionReport};

use super::locate::{find_anchor, find_heading, MATERIALS_HEADINGS, OBJECTIVES_HEADINGS};
use super::package::DocxPackage;
use super::scan::{scan_body, BodyLayout, Paragraph};
use super::writer::{appendix_xml, paragraphs_xml};

/// Anchors longer than this are shortened in progress messages
const ANCHOR_PREVIEW_CHARS: usize = 60;

/// Injects generated content into `.docx` packages
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxInjector;

impl DocxInjector {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentInjector for DocxInjector {
    fn inject(
        &self,
        document: &[u8],
        content: &GeneratedContent,
        options: &InjectionOptions,
        on_progress: &dyn Fn(&str),
    ) -> Result<InjectionOutcome, DocumentError> {
        on_progress("Reading document package...");
        let package = DocxPackage::open(document)?;
        let xml = package.document_xml();
        let layout = scan_body(xml)?;

        let mut plan = InsertionPlan::default();
        let mut report = InjectionReport::default();
        let color = &options.color;

        if options.objectives && !content.objectives_addition.is_empty() {
            on_progress("Locating objectives section...");
            match find_heading(layout.visible(), OBJECTIVES_HEADINGS) {
                Some(heading) => {
                    plan.insert(heading.end, paragraphs_xml(&content.objectives_addition, color));
                    report.objectives_inserted = true;
                    on_progress("Objectives addition inserted");
                }
                None => on_progress("Objectives heading not found, skipping objectives addition"),
            }
        }

        if options.materials && !content.materials_addition.is_empty() {
            on_progress("Locating teaching materials section...");
            match find_heading(layout.visible(), MATERIALS_HEADINGS) {
                Some(heading) => {
                    plan.insert(heading.end, paragraphs_xml(&content.materials_addition, color));
                    report.materials_inserted = true;
                    on_progress("Materials addition inserted");
                }
                None => on_progress("Materials heading not found, skipping materials addition"),
            }
        }

        if options.activities && !content.activities.is_empty() {
            on_progress(&format!(
                "Placing {} activity insertion(s)...",
                content.activities.len()
            ));
            let candidates = anchor_candidates(&layout);

            for activity in &content.activities {
                match find_anchor(&candidates, &activity.anchor_text) {
                    Some(paragraph) => {
                        plan.insert(paragraph.end, paragraphs_xml(&activity.content, color));
                        report.activities_inserted += 1;
                    }
                    None => {
                        on_progress(&format!(
                            "Anchor not found, skipped: \"{}\"",
                            preview(&activity.anchor_text)
                        ));
                        report.skipped_anchors.push(activity.anchor_text.clone());
                    }
                }
            }
        }

        if options.appendix && !content.appendix_table.is_empty() {
            on_progress("Appending digital competency appendix...");
            plan.insert(layout.body_end, appendix_xml(&content.appendix_table, color));
            report.appendix_appended = true;
        }

        on_progress("Finalizing document...");
        let updated = plan.apply(xml);
        let document = package.rebuild(&updated)?;

        Ok(InjectionOutcome { document, report })
    }
}

fn anchor_candidates(layout: &BodyLayout) -> Vec<&Paragraph> {
    layout.visible().filter(|p| !p.text.trim().is_empty()).collect()
}

fn preview(anchor: &str) -> String {
    if anchor.chars().count() <= ANCHOR_PREVIEW_CHARS {
        return anchor.to_string();
    }
    let head: String = anchor.chars().take(ANCHOR_PREVIEW_CHARS).collect();
    format!("{}…", head)
}

/// Pending insertions. Fragments at the same offset keep the order in which
/// they were added.
#[derive(Debug, Default)]
struct InsertionPlan {
    insertions: Vec<(usize, String)>,
}

impl InsertionPlan {
    fn insert(&mut self, offset: usize, fragment: String) {
        if !fragment.is_empty() {
            self.insertions.push((offset, fragment));
        }
    }

    fn apply(mut self, xml: &str) -> String {
        // Stable sort preserves insertion order at equal offsets.
        self.insertions.sort_by_key(|(offset, _)| *offset);

        let extra: usize = self.insertions.iter().map(|(_, f)| f.len()).sum();
        let mut out = String::with_capacity(xml.len() + extra);
        let mut cursor = 0;

        for (offset, fragment) in &self.insertions {
            out.push_str(&xml[cursor..*offset]);
            out.push_str(fragment);
            cursor = *offset;
        }
        out.push_str(&xml[cursor..]);
        out
    }
}
