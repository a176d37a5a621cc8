//! Shared helpers for binary tests

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use std::path::Path;
use std::process::Command;

use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

pub fn nls_bin(config_home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_nls-integrator"));
    command
        .env_remove("GEMINI_API_KEY")
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1");
    command
}

pub fn paragraph(text: &str) -> String {
    format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", text)
}

/// A `.docx` whose body holds one paragraph per line, plus an image part.
pub fn lesson_docx(lines: &[&str]) -> Vec<u8> {
    let body: String = lines.iter().map(|l| paragraph(l)).collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body></w:document>"#,
        body
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let parts: [(&str, &[u8]); 4] = [
        (
            "[Content_Types].xml",
            br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#,
        ),
        (
            "_rels/.rels",
            br#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#,
        ),
        ("word/document.xml", document.as_bytes()),
        ("word/media/image1.png", &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
    ];
    for (name, data) in parts {
        writer.start_file(name, FileOptions::default()).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn read_part(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut data = Vec::new();
    part.read_to_end(&mut data).unwrap();
    data
}

pub fn document_xml(bytes: &[u8]) -> String {
    String::from_utf8(read_part(bytes, "word/document.xml")).unwrap()
}

pub const LESSON: &[&str] = &[
    "BÀI 5: PHÂN SỐ",
    "I. MỤC TIÊU",
    "Học sinh nhận biết được phân số và biểu diễn phân số trên trục số.",
    "II. THIẾT BỊ DẠY HỌC VÀ HỌC LIỆU",
    "Hoạt động 1: Khởi động",
    "Hoạt động 2: Hình thành kiến thức",
];

pub const RESPONSE: &str = "===BAT_DAU_MUC_TIEU===
- Sử dụng phần mềm GeoGebra để biểu diễn phân số (**1.1TC1a**)
===KET_THUC_MUC_TIEU===
===BAT_DAU_HOC_LIEU===
- Máy chiếu, phiếu học tập trên Quizizz
===KET_THUC_HOC_LIEU===
===BAT_DAU_HOAT_DONG===
ANCHOR: \"Hoạt động 1: Khởi động\"
CONTENT: Học sinh trả lời câu hỏi trên Quizizz.
---PHAN_CACH_HOAT_DONG---
ANCHOR: Hoạt động 9: Không tồn tại
CONTENT: Bị bỏ qua.
===KET_THUC_HOAT_DONG===
===BAT_DAU_PHU_LUC===
| Hoạt động | Năng lực số |
|---|---|
| HĐ1 | 1.1TC1a |
===KET_THUC_PHU_LUC===";
