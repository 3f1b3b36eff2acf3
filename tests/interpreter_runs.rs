//! Integration tests for whole interpretation runs
//!
//! Exercises the driver end to end: tokenizer → registry → page builder,
//! fail-fast error reporting with 1-based line numbers, and the final
//! completeness check.

use wahy::wahy::interpreter::Interpreter;

#[test]
fn well_formed_program_produces_one_complete_document() {
    let source = "\
افتح صفحة \"موقعي\"
أضف عنوان \"مرحبا\"
أضف فقرة \"أول صفحة لي\"
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(result.success, "unexpected failure: {:?}", result.error);

    let html = result.html.unwrap();
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("</html>").count(), 1);
    assert!(html.contains("<title>موقعي</title>"));
    assert!(html.contains("<h1>مرحبا</h1>"));
    assert!(html.contains("<p>أول صفحة لي</p>"));
}

#[test]
fn unknown_command_aborts_at_its_line_with_no_later_fragments() {
    let source = "\
افتح صفحة \"موقعي\"
شعوذة
أضف فقرة \"لن تظهر\"
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(!result.success);
    assert_eq!(result.line_number, Some(2));
    assert!(result.error.unwrap().contains("شعوذة"));
    assert_eq!(result.html, None);
}

#[test]
fn comment_and_blank_lines_still_count_toward_line_numbers() {
    let source = "\
افتح صفحة \"موقعي\"

# تعليق لا يُنفذ
شعوذة";

    let result = Interpreter::new().interpret(source);
    assert!(!result.success);
    assert_eq!(result.line_number, Some(4));
}

#[test]
fn unclosed_page_fails_at_the_total_line_count() {
    let result = Interpreter::new().interpret("افتح صفحة \"موقعي\"");
    assert!(!result.success);
    assert_eq!(result.line_number, Some(1));
    assert!(result.error.unwrap().contains("أغلق صفحة"));
}

#[test]
fn empty_input_is_an_incomplete_document() {
    let result = Interpreter::new().interpret("");
    assert!(!result.success);
    assert_eq!(result.line_number, Some(1));
}

#[test]
fn content_before_opening_the_page_fails_on_that_line() {
    let result = Interpreter::new().interpret("أضف فقرة \"قبل الفتح\"");
    assert!(!result.success);
    assert_eq!(result.line_number, Some(1));
    let error = result.error.unwrap();
    assert!(error.contains("أضف فقرة"));
    assert!(error.contains("افتح صفحة"));
}

#[test]
fn missing_paragraph_argument_is_an_arity_error_naming_the_command() {
    let source = "\
افتح صفحة \"موقعي\"
أضف فقرة
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(!result.success);
    assert_eq!(result.line_number, Some(2));
    assert!(result.error.unwrap().contains("أضف فقرة"));
}

#[test]
fn nested_lists_close_innermost_first() {
    let source = "\
افتح صفحة \"قوائم\"
ابدأ قائمة
أضف عنصر \"خارجي\"
ابدأ قائمة_مرقمة
أضف عنصر \"داخلي\"
أنهِ قائمة
أنهِ قائمة
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(result.success, "unexpected failure: {:?}", result.error);

    let html = result.html.unwrap();
    let ol_close = html.find("</ol>").unwrap();
    let ul_close = html.find("</ul>").unwrap();
    assert!(
        ol_close < ul_close,
        "ordered (innermost) list must close before the unordered one"
    );
}

#[test]
fn ending_a_list_without_one_open_fails_with_the_line() {
    let source = "\
افتح صفحة \"موقعي\"
أنهِ قائمة
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(!result.success);
    assert_eq!(result.line_number, Some(2));
    assert!(result.error.unwrap().contains("أنهِ قائمة"));
}

#[test]
fn style_commands_flush_once_before_the_closing_boilerplate() {
    let source = "\
افتح صفحة \"ألوان\"
غيّر لون_الخلفية إلى أحمر
غيّر لون_الخلفية إلى أزرق
غيّر لون_النص إلى أسود
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(result.success, "unexpected failure: {:?}", result.error);

    let html = result.html.unwrap();
    assert!(html.ends_with("</style>\n</body>\n</html>"));
    assert!(html.contains("body { background-color: أزرق; color: أسود; }"));
    assert!(!html.contains("أحمر"), "overwritten color must not survive");
}

#[test]
fn free_text_in_commands_is_escaped_in_the_output() {
    let source = "\
افتح صفحة \"موقعي\"
أضف فقرة \"<script>&'\"
أغلق صفحة";

    let result = Interpreter::new().interpret(source);
    assert!(result.success, "unexpected failure: {:?}", result.error);
    let html = result.html.unwrap();
    assert!(html.contains("<p>&lt;script&gt;&amp;&#x27;</p>"));
}

#[test]
fn one_interpreter_serves_independent_runs_without_state_leaking() {
    let interpreter = Interpreter::new();

    let first = interpreter.interpret("افتح صفحة \"أولى\"\nأغلق صفحة");
    assert!(first.success);

    // A second run starts from a fresh page; an unopened-page failure here
    // would mean state leaked from the first run.
    let second = interpreter.interpret("افتح صفحة \"ثانية\"\nأغلق صفحة");
    assert!(second.success);
    assert!(second.html.unwrap().contains("<title>ثانية</title>"));
}
