//! Integration prompt value object

use crate::domain::content::markers::{
    ACTIVITIES_BEGIN, ACTIVITIES_END, ACTIVITY_SEPARATOR, ANCHOR_FIELD, APPENDIX_BEGIN,
    APPENDIX_END, CONTENT_FIELD, MATERIALS_BEGIN, MATERIALS_END, OBJECTIVES_BEGIN,
    OBJECTIVES_END,
};

use super::IntegrationRequest;

/// Role and task shared by every prompt
const BASE_INSTRUCTION: &str = r#"You are an experienced Vietnamese teacher-trainer who integrates digital competency (Năng lực số, NLS) into existing lesson plans, following the national digital competency framework for students.

Your task:
- Read the lesson plan below and propose additions that develop the students' digital competency without changing the lesson's subject content.
- Write every addition in Vietnamese, in the same register as the lesson plan.
- Keep each addition concise and directly usable by the teacher in class.
- Only reference digital tools that are free and commonly available in Vietnamese schools.
- Do NOT rewrite or repeat the existing lesson content."#;

/// Value object holding the complete prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationPrompt {
    content: String,
}

impl IntegrationPrompt {
    /// Build the prompt for a request
    pub fn build(request: &IntegrationRequest) -> Self {
        let subject = request.subject().label();
        let grade = request.grade();

        let content = format!(
            "{base}\n\n\
             Subject: {subject}\n\
             Grade: {grade_label} (digital competency tier {tier})\n\n\
             {format}\n\n\
             LESSON PLAN:\n\
             \"\"\"\n{source}\n\"\"\"",
            base = BASE_INSTRUCTION,
            subject = subject,
            grade_label = grade.label(),
            tier = grade.competency_tier(),
            format = response_format(),
            source = request.source_text().trim(),
        );

        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Output contract the response parser relies on
fn response_format() -> String {
    format!(
        "Answer using EXACTLY the following plain-text format. Do not use JSON. Do not add anything outside the markers.\n\
         \n\
         {OBJECTIVES_BEGIN}\n\
         (digital competency objectives to add to section I. MỤC TIÊU, one per line)\n\
         {OBJECTIVES_END}\n\
         {MATERIALS_BEGIN}\n\
         (digital learning materials and tools to add to section II, one per line)\n\
         {MATERIALS_END}\n\
         {ACTIVITIES_BEGIN}\n\
         {ANCHOR_FIELD} (a short phrase copied VERBATIM from the lesson plan, e.g. an activity title)\n\
         {CONTENT_FIELD} (the digital competency activity to insert right after that phrase)\n\
         {ACTIVITY_SEPARATOR}\n\
         {ANCHOR_FIELD} ...\n\
         {CONTENT_FIELD} ...\n\
         {ACTIVITIES_END}\n\
         {APPENDIX_BEGIN}\n\
         (a summary table in markdown pipe format with columns: Hoạt động | Năng lực số | Mã chỉ báo | Biểu hiện)\n\
         {APPENDIX_END}\n\
         \n\
         Rules for {ANCHOR_FIELD}: copy the text exactly as it appears in the lesson plan, on one line, without quotes."
    )
}
