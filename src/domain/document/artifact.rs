//! Result artifact value object

/// Tag prepended to the original file name
pub const OUTPUT_PREFIX: &str = "NLS_";

/// The modified document, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultArtifact {
    file_name: String,
    bytes: Vec<u8>,
}

impl ResultArtifact {
    /// Name the artifact after its source document
    pub fn for_source(source_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: output_file_name(source_name),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.bytes.len();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

/// `NLS_<name>`, applied to the bare file name only
pub fn output_file_name(source_name: &str) -> String {
    format!("{}{}", OUTPUT_PREFIX, source_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_source_name() {
        let artifact = ResultArtifact::for_source("Bai 3 - Phan so.docx", vec![]);
        assert_eq!(artifact.file_name(), "NLS_Bai 3 - Phan so.docx");
    }

    #[test]
    fn human_readable_sizes() {
        assert_eq!(ResultArtifact::for_source("a.docx", vec![0; 500]).human_readable_size(), "500 B");
        assert_eq!(ResultArtifact::for_source("a.docx", vec![0; 2048]).human_readable_size(), "2.0 KB");
    }

    #[test]
    fn into_bytes_returns_payload() {
        let artifact = ResultArtifact::for_source("a.docx", vec![7, 8]);
        assert_eq!(artifact.into_bytes(), vec![7, 8]);
    }
}
