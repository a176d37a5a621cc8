//! Injection report

/// What the injector actually placed into the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionReport {
    pub objectives_inserted: bool,
    pub materials_inserted: bool,
    pub activities_inserted: usize,
    /// Anchors that matched no paragraph, in response order
    pub skipped_anchors: Vec<String>,
    pub appendix_appended: bool,
}

impl InjectionReport {
    /// Total number of insertion points written
    pub fn insertion_count(&self) -> usize {
        usize::from(self.objectives_inserted)
            + usize::from(self.materials_inserted)
            + self.activities_inserted
            + usize::from(self.appendix_appended)
    }
}
