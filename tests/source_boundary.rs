//! Tests for the file boundary
//!
//! Acquisition failures (missing file, bad encoding) must come back in the
//! same failure shape as core errors, tagged with line number 0; a readable
//! file delegates straight to the driver.

use std::fs;
use std::path::PathBuf;
use wahy::wahy::source::interpret_path;

fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn missing_file_fails_at_line_zero() {
    let result = interpret_path("/definitely/not/here.wahy");
    assert!(!result.success);
    assert_eq!(result.line_number, Some(0));
    assert!(result.error.unwrap().contains("file not found"));
}

#[test]
fn invalid_utf8_fails_at_line_zero() {
    let path = std::env::temp_dir().join("wahy_invalid_utf8_test.wahy");
    fs::write(&path, [0xC3, 0x28, 0xFF]).unwrap();

    let result = interpret_path(&path);
    fs::remove_file(&path).ok();

    assert!(!result.success);
    assert_eq!(result.line_number, Some(0));
    assert!(result.error.unwrap().contains("UTF-8"));
}

#[test]
fn demo_program_interprets_to_a_complete_document() {
    let result = interpret_path(demo_path("welcome.wahy"));
    assert!(result.success, "unexpected failure: {:?}", result.error);

    let html = result.html.unwrap();
    assert!(html.contains("<title>موقعي الأول</title>"));
    assert!(html.contains("<h1>أهلًا بالعالم</h1>"));
    assert!(html.contains("<li>سهلة التعلم</li>"));
    assert!(html.contains("<a href=\"https://example.com/wahy\">المزيد عن وحي</a>"));
    assert!(html.contains("body { background-color: #f5f5dc; }"));
    assert!(html.ends_with("</html>"));
}

#[test]
fn interpretation_errors_keep_their_real_line_numbers_through_the_boundary() {
    let path = std::env::temp_dir().join("wahy_unknown_command_test.wahy");
    fs::write(&path, "افتح صفحة \"موقعي\"\nتعويذة\nأغلق صفحة\n").unwrap();

    let result = interpret_path(&path);
    fs::remove_file(&path).ok();

    assert!(!result.success);
    assert_eq!(result.line_number, Some(2));
}
