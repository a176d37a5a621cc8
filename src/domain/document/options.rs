//! Injection options

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidColorError;

/// Hex RGB color applied to every inserted run (WordprocessingML `w:color`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightColor(String);

impl HighlightColor {
    /// Red, so insertions stand out from the original text
    pub fn red() -> Self {
        Self("FF0000".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self::red()
    }
}

impl FromStr for HighlightColor {
    type Err = InvalidColorError;

    /// Accepts `FF0000` or `#ff0000`; stored upper-case without `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidColorError {
                input: s.to_string(),
            });
        }
        Ok(Self(hex.to_ascii_uppercase()))
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which sections get injected, and how insertions are marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionOptions {
    pub objectives: bool,
    pub materials: bool,
    pub activities: bool,
    pub appendix: bool,
    pub color: HighlightColor,
}

impl Default for InjectionOptions {
    fn default() -> Self {
        Self {
            objectives: true,
            materials: true,
            activities: true,
            appendix: true,
            color: HighlightColor::default(),
        }
    }
}
