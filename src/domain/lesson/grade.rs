//! Grade level value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidGradeError;

/// All selectable grades (lower and upper secondary)
pub const ALL_GRADES: &[Grade] = &[
    Grade::Six,
    Grade::Seven,
    Grade::Eight,
    Grade::Nine,
    Grade::Ten,
    Grade::Eleven,
    Grade::Twelve,
];

/// Grade levels covered by the digital competency framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl Grade {
    /// Numeric grade
    pub const fn number(&self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Eleven => 11,
            Self::Twelve => 12,
        }
    }

    /// Vietnamese label ("Lớp 6")
    pub fn label(&self) -> String {
        format!("Lớp {}", self.number())
    }

    /// Digital competency proficiency tier expected at this grade
    pub const fn competency_tier(&self) -> &'static str {
        match self {
            Self::Six | Self::Seven => "TC1",
            Self::Eight | Self::Nine => "TC2",
            Self::Ten | Self::Eleven | Self::Twelve => "NC1",
        }
    }

    fn from_number(n: u8) -> Option<Self> {
        ALL_GRADES.iter().copied().find(|g| g.number() == n)
    }
}

impl FromStr for Grade {
    type Err = InvalidGradeError;

    /// Accepts "7", "lop-7", "lop 7" or "Lớp 7".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let digits = lower
            .strip_prefix("lớp")
            .or_else(|| lower.strip_prefix("lop"))
            .unwrap_or(&lower)
            .trim_start_matches(['-', ' ']);

        digits
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| InvalidGradeError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
