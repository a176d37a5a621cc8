//! Source document value object

use crate::domain::error::InputError;

/// Accepted file extension, compared ASCII case-insensitively
pub const DOCX_EXTENSION: &str = ".docx";

/// A lesson plan accepted for processing: a `.docx` name plus its bytes.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    file_name: String,
    bytes: Vec<u8>,
}

impl SourceDocument {
    /// Validate the name and wrap the bytes
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, InputError> {
        let file_name = file_name.into();
        Self::check_name(&file_name)?;
        Ok(Self { file_name, bytes })
    }

    /// Suffix check only; contents are not sniffed.
    pub fn check_name(file_name: &str) -> Result<(), InputError> {
        if file_name.trim().is_empty() {
            return Err(InputError::MissingFile);
        }
        let lower = file_name.to_ascii_lowercase();
        if lower.len() <= DOCX_EXTENSION.len() || !lower.ends_with(DOCX_EXTENSION) {
            return Err(InputError::NotDocx(file_name.to_string()));
        }
        Ok(())
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_docx() {
        let doc = SourceDocument::new("giao_an.docx", vec![1, 2]).unwrap();
        assert_eq!(doc.file_name(), "giao_an.docx");
        assert_eq!(doc.bytes(), &[1, 2]);
    }

    #[test]
    fn suffix_is_case_insensitive() {
        assert!(SourceDocument::check_name("BAI1.DOCX").is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            SourceDocument::check_name("giao_an.doc"),
            Err(InputError::NotDocx("giao_an.doc".to_string()))
        );
        assert!(SourceDocument::check_name("giao_an.pdf").is_err());
        assert!(SourceDocument::check_name(".docx").is_err());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            SourceDocument::check_name("  "),
            Err(InputError::MissingFile)
        );
    }
}
