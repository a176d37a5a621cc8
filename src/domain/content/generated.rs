//! Generated content bundle

/// One activity insertion: where (anchor) and what (content).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityInsertion {
    pub anchor_text: String,
    pub content: String,
}

impl ActivityInsertion {
    pub fn new(anchor_text: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            anchor_text: anchor_text.into(),
            content: content.into(),
        }
    }
}

/// Content decoded from one model response.
/// Absent sections stay at their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedContent {
    pub objectives_addition: String,
    pub materials_addition: String,
    pub activities: Vec<ActivityInsertion>,
    pub appendix_table: String,
}

impl GeneratedContent {
    /// True when the response yielded nothing usable
    pub fn is_empty(&self) -> bool {
        self.objectives_addition.is_empty()
            && self.materials_addition.is_empty()
            && self.activities.is_empty()
            && self.appendix_table.is_empty()
    }

    /// Short human-readable summary of what was decoded
    pub fn summary(&self) -> String {
        let mark = |present: bool| if present { "yes" } else { "no" };
        format!(
            "objectives: {}, materials: {}, activities: {}, appendix: {}",
            mark(!self.objectives_addition.is_empty()),
            mark(!self.materials_addition.is_empty()),
            self.activities.len(),
            mark(!self.appendix_table.is_empty()),
        )
    }
}
