use std::{fs, io::Cursor};

use apa::get_result;
use walkdir::WalkDir;

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in WalkDir::new("demos")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "apa"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = get_result(&content, false) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn bindings_and_arithmetic() {
    assert_success("låt x = 1 + 2; x;");
    assert_success("låt x = 7 * 9; x;");
    assert_success("låt x = (5 + 10 * 2 + 15 / 3) * 2 + -10; x;");
    assert_success("låt a = 5; låt b = a; låt c = a + b + 5; c;");
}

#[test]
fn functions_and_closures() {
    assert_success("låt kvadrat = funktion(x) { x * x }; kvadrat(3);");
    assert_success("låt addera = funktion(a, b) { a + b }; addera(2, 5);");
    assert_success(
        "låt nyAddering = funktion(x) { funktion(y) { x + y } };
         låt adderaTvå = nyAddering(2);
         adderaTvå(2);",
    );
}

#[test]
fn strings_and_arrays() {
    assert_success(r#""Hej" + " " + "Världen!";"#);
    assert_success(r#"längd("hej världen");"#);
    assert_success("låt xs = [1, 2, 3]; xs[0] + xs[1] + xs[2];");
    assert_success("längd([1, 2, 3]);");
}

#[test]
fn conditionals_and_returns() {
    assert_success("om (1 < 2) { 10 } annars { 20 }");
    assert_success("låt f = funktion() { om (sant) { tillbaka 1; } tillbaka 2; }; f();");
}

#[test]
fn failing_scripts() {
    assert_failure("x + 1");
    assert_failure("5 + sant;");
    assert_failure("längd(1)");
    assert_failure(r#""Hej" - "Världen""#);
    assert_failure("låt x 5;");
}

#[test]
fn repl_session_keeps_bindings_between_lines() {
    let mut input = Cursor::new("låt a = 5;\na + 2;\n");
    let mut output = Vec::new();

    apa::repl::start(&mut input, &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), ">> >> 7\n>> ");
}

#[test]
fn repl_prints_parse_errors_indented_and_keeps_going() {
    let mut input = Cursor::new("låt;\n1 + 2;\n");
    let mut output = Vec::new();

    apa::repl::start(&mut input, &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        ">> \texpected next token to be IDENT, got ; instead\n>> 3\n>> "
    );
}

#[test]
fn repl_reports_runtime_errors() {
    let mut input = Cursor::new("foobar\n");
    let mut output = Vec::new();

    apa::repl::start(&mut input, &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        ">> ERROR: identifier not found: foobar\n>> "
    );
}
