//! String-extraction behavior over whole inputs.

use rstest::rstest;
use std::collections::HashSet;
use texter_parser::ruby::testing::ruby_strings;

#[test]
fn extracts_strings_from_mixed_code() {
    let strings = ruby_strings(r#"aaa 'bbb' ccc("ddd", eee)"#).unwrap();
    let set: HashSet<&str> = strings.iter().map(String::as_str).collect();
    assert_eq!(set, HashSet::from(["'bbb'", "\"ddd\""]));
}

#[test]
fn handles_escaped_double_quotes() {
    let source = r#""foo\"bar\"""#;
    assert_eq!(ruby_strings(source).unwrap(), vec![source.to_string()]);
}

#[test]
fn handles_escaped_single_quotes() {
    let source = r"'foo\'bar\''";
    assert_eq!(ruby_strings(source).unwrap(), vec![source.to_string()]);
}

#[test]
fn ignores_quotes_in_comments() {
    let strings = ruby_strings("# comment containing \" and ' \"\n").unwrap();
    assert!(strings.is_empty());
}

#[test]
fn ignores_quotes_in_regexp_and_percent_literals() {
    let strings = ruby_strings("/'a\"/ %r(a 'a') %Q{\"foo\"}\n").unwrap();
    assert!(strings.is_empty());
}

#[rstest]
#[case::single("x = 'a'", &["'a'"])]
#[case::double("x = \"a\"", &["\"a\""])]
#[case::both("'a' + \"b\"", &["'a'", "\"b\""])]
#[case::inside_braces("h = { :k => 'v' }", &["'v'"])]
#[case::after_comment_line("# 'a'\n'b'", &["'b'"])]
#[case::empty_strings("f('', \"\")", &["''", "\"\""])]
fn finds_expected_strings(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(ruby_strings(source).unwrap(), expected);
}

#[test]
fn string_inside_interpolation_is_not_reported_separately() {
    // the outer literal is handled atomically; its interpolation body is
    // opaque to the walker
    let strings = ruby_strings(r##"f("#{g('x')}")"##).unwrap();
    assert_eq!(strings, vec![r##""#{g('x')}""##.to_string()]);
}

#[test]
fn adjacent_literals_are_kept_separate() {
    let strings = ruby_strings(r#"'a''b'"#).unwrap();
    assert_eq!(strings, vec!["'a'".to_string(), "'b'".to_string()]);
}
