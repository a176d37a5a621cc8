//! End-to-end runs of the integrate command using a saved AI response

mod common;

use common::{document_xml, lesson_docx, nls_bin, paragraph, read_part, LESSON, RESPONSE};
use tempfile::TempDir;

struct Run {
    home: TempDir,
    input: std::path::PathBuf,
    response: std::path::PathBuf,
}

fn prepare() -> Run {
    let home = TempDir::new().unwrap();
    let input = home.path().join("bai5.docx");
    let response = home.path().join("response.txt");
    std::fs::write(&input, lesson_docx(LESSON)).unwrap();
    std::fs::write(&response, RESPONSE).unwrap();
    Run {
        home,
        input,
        response,
    }
}

#[test]
fn writes_prefixed_copy_next_to_input() {
    let run = prepare();
    let original = std::fs::read(&run.input).unwrap();

    let output = nls_bin(run.home.path())
        .args(["-s", "math", "-g", "6", "--response-file"])
        .arg(&run.response)
        .arg(&run.input)
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");

    let result_path = run.home.path().join("NLS_bai5.docx");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), result_path.to_string_lossy());

    // Input untouched
    assert_eq!(std::fs::read(&run.input).unwrap(), original);

    let result = std::fs::read(&result_path).unwrap();
    let xml = document_xml(&result);

    let heading = xml.find(&paragraph("I. MỤC TIÊU")).unwrap();
    let objective = xml.find("Sử dụng phần mềm GeoGebra").unwrap();
    let materials_heading = xml.find(&paragraph("II. THIẾT BỊ DẠY HỌC VÀ HỌC LIỆU")).unwrap();
    let materials = xml.find("Máy chiếu, phiếu học tập").unwrap();
    let activity_anchor = xml.find(&paragraph("Hoạt động 1: Khởi động")).unwrap();
    let activity = xml.find("Học sinh trả lời câu hỏi trên Quizizz.").unwrap();
    let next_activity = xml.find(&paragraph("Hoạt động 2: Hình thành kiến thức")).unwrap();
    let table = xml.find("<w:tbl>").unwrap();
    let sect = xml.find("<w:sectPr").unwrap();

    assert!(heading < objective && objective < materials_heading);
    assert!(materials_heading < materials && materials < activity_anchor);
    assert!(activity_anchor < activity && activity < next_activity);
    assert!(next_activity < table && table < sect);

    assert!(xml.contains(r#"<w:color w:val="FF0000"/>"#));
    assert!(!xml.contains("Bị bỏ qua."));

    // Other parts are carried over byte for byte
    assert_eq!(
        read_part(&result, "word/media/image1.png"),
        read_part(&original, "word/media/image1.png")
    );

    assert!(stderr.contains("Anchor not found"), "stderr: {stderr}");
    assert!(stderr.contains("Hoạt động 9: Không tồn tại"));
}

#[test]
fn output_dir_and_disabled_sections() {
    let run = prepare();
    let out_dir = run.home.path().join("out");

    let output = nls_bin(run.home.path())
        .args(["-s", "literature", "-g", "10", "--no-appendix", "--no-objectives"])
        .args(["--color", "#0070c0", "-o"])
        .arg(&out_dir)
        .arg("--response-file")
        .arg(&run.response)
        .arg(&run.input)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(!run.home.path().join("NLS_bai5.docx").exists());

    let xml = document_xml(&std::fs::read(out_dir.join("NLS_bai5.docx")).unwrap());
    assert!(!xml.contains("<w:tbl>"));
    assert!(!xml.contains("GeoGebra"));
    assert!(xml.contains("Máy chiếu"));
    assert!(xml.contains(r#"<w:color w:val="0070C0"/>"#));
}

#[test]
fn subject_and_grade_from_config_file() {
    let run = prepare();
    let config_dir = run.home.path().join("nls-integrator");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "subject = \"math\"\ngrade = \"7\"\n\n[injection]\nmaterials = false\n",
    )
    .unwrap();

    let output = nls_bin(run.home.path())
        .arg("--response-file")
        .arg(&run.response)
        .arg(&run.input)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let xml = document_xml(&std::fs::read(run.home.path().join("NLS_bai5.docx")).unwrap());
    assert!(!xml.contains("Máy chiếu"));
    assert!(xml.contains("GeoGebra"));
}

#[test]
fn save_response_keeps_raw_text() {
    let run = prepare();
    let saved = run.home.path().join("saved.txt");

    let output = nls_bin(run.home.path())
        .args(["-s", "math", "-g", "6", "--response-file"])
        .arg(&run.response)
        .arg("--save-response")
        .arg(&saved)
        .arg(&run.input)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), RESPONSE);
}

#[test]
fn unrecognized_response_still_produces_copy() {
    let run = prepare();
    std::fs::write(&run.response, "Xin lỗi, tôi không thể giúp.").unwrap();

    let output = nls_bin(run.home.path())
        .args(["-s", "math", "-g", "6", "--response-file"])
        .arg(&run.response)
        .arg(&run.input)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning"), "stderr: {stderr}");
    assert!(stderr.contains("Nothing was inserted"));

    let original = std::fs::read(&run.input).unwrap();
    let result = std::fs::read(run.home.path().join("NLS_bai5.docx")).unwrap();
    assert_eq!(document_xml(&result), document_xml(&original));
}

#[test]
fn several_inputs_run_in_sequence() {
    let run = prepare();
    let second = run.home.path().join("bai6.docx");
    std::fs::write(&second, lesson_docx(LESSON)).unwrap();

    let output = nls_bin(run.home.path())
        .args(["-s", "math", "-g", "6", "--response-file"])
        .arg(&run.response)
        .arg(&run.input)
        .arg(&second)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(run.home.path().join("NLS_bai5.docx").exists());
    assert!(run.home.path().join("NLS_bai6.docx").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 of 2 file(s) processed"));
}
