//! School subject value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSubjectError;

/// All selectable subjects, in menu order
pub const ALL_SUBJECTS: &[Subject] = &[
    Subject::Math,
    Subject::Physics,
    Subject::Chemistry,
    Subject::Biology,
    Subject::NaturalScience,
    Subject::Literature,
    Subject::English,
    Subject::Informatics,
    Subject::History,
    Subject::Geography,
    Subject::Civics,
];

/// Subjects of the general-education curriculum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    Biology,
    NaturalScience,
    Literature,
    English,
    Informatics,
    History,
    Geography,
    Civics,
}

impl Subject {
    /// Vietnamese subject name, as written in lesson plans and prompts
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Math => "Toán",
            Self::Physics => "Vật lý",
            Self::Chemistry => "Hóa học",
            Self::Biology => "Sinh học",
            Self::NaturalScience => "Khoa học tự nhiên",
            Self::Literature => "Ngữ văn",
            Self::English => "Tiếng Anh",
            Self::Informatics => "Tin học",
            Self::History => "Lịch sử",
            Self::Geography => "Địa lý",
            Self::Civics => "GDCD",
        }
    }

    /// Stable command-line identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
            Self::NaturalScience => "natural-science",
            Self::Literature => "literature",
            Self::English => "english",
            Self::Informatics => "informatics",
            Self::History => "history",
            Self::Geography => "geography",
            Self::Civics => "civics",
        }
    }
}

impl FromStr for Subject {
    type Err = InvalidSubjectError;

    /// Accepts the identifier or the Vietnamese label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_SUBJECTS
            .iter()
            .copied()
            .find(|subject| {
                subject.as_str() == wanted || subject.label().to_lowercase() == wanted
            })
            .ok_or_else(|| InvalidSubjectError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
