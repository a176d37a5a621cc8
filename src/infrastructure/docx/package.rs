//! OOXML package access
//!
//! A `.docx` file is a zip container. Only `word/document.xml` is ever
//! rewritten; every other part is copied raw, compressed bytes included, so
//! images, embedded OLE objects, equations, styles and numbering come out
//! exactly as they went in.

use std::io::{Cursor, Read, Write};

use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::application::ports::DocumentError;

/// Main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

const UTF8_BOM: char = '\u{feff}';

/// Read-only view of a package plus its decoded main document part.
pub struct DocxPackage<'a> {
    bytes: &'a [u8],
    document_xml: String,
    // Stripped on read, written back on rebuild
    had_bom: bool,
}

impl<'a> DocxPackage<'a> {
    /// Open a package and read its main document part
    pub fn open(bytes: &'a [u8]) -> Result<Self, DocumentError> {
        let mut archive = open_archive(bytes)?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| DocumentError::MissingPart(DOCUMENT_PART.to_string()))?;

        let mut document_xml = String::new();
        part.read_to_string(&mut document_xml)
            .map_err(|e| DocumentError::MalformedXml(e.to_string()))?;

        let had_bom = document_xml.starts_with(UTF8_BOM);
        if had_bom {
            document_xml.remove(0);
        }

        Ok(Self {
            bytes,
            document_xml,
            had_bom,
        })
    }

    /// The main document XML as read from the package
    pub fn document_xml(&self) -> &str {
        &self.document_xml
    }

    /// Write a new package with `document_xml` as the main part.
    /// Entry order and all other entries are preserved, and so is a leading BOM.
    pub fn rebuild(&self, document_xml: &str) -> Result<Vec<u8>, DocumentError> {
        let write_err = |e: ZipError| DocumentError::WriteFailed(e.to_string());

        let mut archive = open_archive(self.bytes)?;
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for index in 0..archive.len() {
            let name = archive.by_index_raw(index).map_err(write_err)?.name().to_string();

            if name == DOCUMENT_PART {
                let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
                writer.start_file(name, options).map_err(write_err)?;
                if self.had_bom {
                    let mut bom = [0u8; 3];
                    writer
                        .write_all(UTF8_BOM.encode_utf8(&mut bom).as_bytes())
                        .map_err(|e| DocumentError::WriteFailed(e.to_string()))?;
                }
                writer
                    .write_all(document_xml.as_bytes())
                    .map_err(|e| DocumentError::WriteFailed(e.to_string()))?;
            } else {
                let entry = archive.by_index_raw(index).map_err(write_err)?;
                writer.raw_copy_file(entry).map_err(write_err)?;
            }
        }

        let cursor = writer.finish().map_err(write_err)?;
        Ok(cursor.into_inner())
    }
}

fn open_archive(bytes: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>, DocumentError> {
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| DocumentError::InvalidPackage(e.to_string()))
}
