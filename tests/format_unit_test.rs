//! Unit tests for the line formatter.

use csv_faker::format::{escape_value, format_header, format_line, format_record};
use csv_faker::{Options, Schema};

fn user_schema() -> Schema {
    Schema::new()
        .field("userId", || "1".to_string())
        .field("nickname", || "test".to_string())
}

#[test]
fn test_format_line_defaults() {
    let line = format_line(["v1", "v2"], &Options::default());
    assert_eq!(line, "\"v1\",\"v2\"\n");
}

#[test]
fn test_format_line_single_value() {
    let line = format_line(["only"], &Options::default());
    assert_eq!(line, "\"only\"\n");
}

#[test]
fn test_format_line_no_values_is_just_new_line() {
    let values: [&str; 0] = [];
    assert_eq!(format_line(values, &Options::default()), "\n");

    let options = Options::default().with_new_line("\r\n");
    assert_eq!(format_line(values, &options), "\r\n");
}

#[test]
fn test_format_line_multi_char_delimiter() {
    let options = Options::default().with_delimiter(" | ");
    assert_eq!(format_line(["a", "b", "c"], &options), "\"a\" | \"b\" | \"c\"\n");
}

#[test]
fn test_format_line_empty_delimiter_and_quote() {
    let options = Options::default().with_delimiter("").with_quote("");
    assert_eq!(format_line(["a", "b"], &options), "ab\n");
}

#[test]
fn test_escape_with_custom_escape() {
    let options = Options::default().with_escape("-");
    let line = format_line(["\"1\"", "\"te,st\n"], &options);
    assert_eq!(line, "\"-\"1-\"\",\"-\"te,st\n\"\n");
}

#[test]
fn test_escape_with_default_escape() {
    let line = format_line(["\"1\"", "\"te,st\n"], &Options::default());
    assert_eq!(line, "\"\"\"1\"\"\",\"\"\"te,st\n\"\n");
}

#[test]
fn test_escape_custom_quote() {
    let options = Options::default().with_quote("'").with_escape("\\");
    let line = format_line(["it's", "say \"hi\""], &options);
    assert_eq!(line, "'it\\'s','say \"hi\"'\n");
}

#[test]
fn test_escape_multi_char_quote() {
    let options = Options::default().with_quote("**").with_escape("!");
    assert_eq!(escape_value("a**b**c", &options), "a!**b!**c");
    assert_eq!(escape_value("a*b", &options), "a*b");
}

#[test]
fn test_escape_reverses_to_original() {
    let options = Options::default();
    for value in ["plain", "\"", "a\"b\"c", "\"\"", "ends with \""] {
        let escaped = escape_value(value, &options);
        let restored = escaped.replace("\"\"", "\"");
        assert_eq!(restored, value);
    }

    let options = Options::default().with_escape("\\");
    for value in ["\"quoted\"", "x\"y"] {
        let escaped = escape_value(value, &options);
        assert_eq!(escaped.replace("\\\"", "\""), value);
    }
}

#[test]
fn test_delimiter_and_new_line_in_values_pass_through() {
    let line = format_line(["a,b", "c\nd"], &Options::default());
    assert_eq!(line, "\"a,b\",\"c\nd\"\n");
}

#[test]
fn test_format_header_uses_insertion_order() {
    let schema = Schema::new()
        .field("zeta", String::new)
        .field("alpha", String::new)
        .field("mid", String::new);
    assert_eq!(
        format_header(&schema, &Options::default()),
        "\"zeta\",\"alpha\",\"mid\"\n"
    );
}

#[test]
fn test_format_header_semicolon() {
    let options = Options::default().with_delimiter(";");
    assert_eq!(
        format_header(&user_schema(), &options),
        "\"userId\";\"nickname\"\n"
    );
}

#[test]
fn test_format_record_invokes_each_generator_once() {
    let mut counter = 0;
    let mut schema = Schema::new()
        .field("id", move || {
            counter += 1;
            counter.to_string()
        })
        .field("name", || "x".to_string());

    let options = Options::default();
    assert_eq!(format_record(&mut schema, &options), "\"1\",\"x\"\n");
    assert_eq!(format_record(&mut schema, &options), "\"2\",\"x\"\n");
    assert_eq!(format_record(&mut schema, &options), "\"3\",\"x\"\n");
}

#[test]
fn test_format_record_empty_schema() {
    let mut schema = Schema::new();
    assert_eq!(format_record(&mut schema, &Options::default()), "\n");
    assert_eq!(format_header(&schema, &Options::default()), "\n");
}
