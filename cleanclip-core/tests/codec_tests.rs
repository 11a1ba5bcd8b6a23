// cleanclip-core/tests/codec_tests.rs
//! The editable `pattern -> placeholder` format: round trips and rejections.

use cleanclip_core::{parse, serialize, CleanclipError, Rule, RuleSet};

fn rule_set(pairs: &[(&str, &str)]) -> RuleSet {
    RuleSet::new(
        pairs
            .iter()
            .map(|(pattern, placeholder)| Rule::new(pattern, placeholder).unwrap())
            .collect(),
    )
    .unwrap()
}

#[test]
fn default_rules_round_trip() {
    let defaults = RuleSet::load_default_rules().unwrap();
    let text = serialize(&defaults);
    assert_eq!(parse(&text).unwrap(), defaults);
}

#[test]
fn awkward_fields_round_trip() {
    let rules = rule_set(&[
        (r"^\s*password\s*=\s*\S+$", "password = ***"),
        ("a|b", "x -> y"),
        ("it's", "it is"),
        (r"(?i)token:\s*\w+", "token: <redacted>"),
    ]);
    assert_eq!(parse(&serialize(&rules)).unwrap(), rules);
}

#[test]
fn single_rule_serializes_to_exact_last_line() {
    let text = serialize(&rule_set(&[("a", "b")]));
    assert_eq!(text.lines().last().unwrap(), "a -> b");
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().take(2).all(|line| line.starts_with('#')));
}

#[test]
fn serialization_keeps_duplicates_and_order() {
    let rules = rule_set(&[("z", "1"), ("a", "2"), ("z", "1")]);
    let text = serialize(&rules);
    let body: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(body, vec!["z -> 1", "a -> 2", "z -> 1"]);
}

#[test]
fn comment_only_document_is_rejected() {
    let err = parse("# one\n\n   # two\n\t\n").unwrap_err();
    assert!(matches!(err, CleanclipError::NoRulesProvided));
    assert!(matches!(parse("").unwrap_err(), CleanclipError::NoRulesProvided));
}

#[test]
fn line_without_separator_is_rejected() {
    let err = parse("good -> ok\njust a pattern\n").unwrap_err();
    match err {
        CleanclipError::MissingSeparator { line } => assert_eq!(line, "just a pattern"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn uncompilable_pattern_is_rejected_with_diagnostic() {
    let err = parse("([unclosed -> x").unwrap_err();
    match err {
        CleanclipError::InvalidPattern { pattern, message } => {
            assert_eq!(pattern, "([unclosed");
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn first_bad_line_stops_parsing() {
    let err = parse("a -> b\n( -> c\nno separator\n").unwrap_err();
    assert!(matches!(err, CleanclipError::InvalidPattern { .. }));
}

#[test]
fn quotes_are_trimmed_as_characters_not_parsed() {
    let parsed = parse(r#""'mixed"' -> 'x'"#).unwrap();
    assert_eq!(parsed.rules()[0].pattern(), "mixed");
    assert_eq!(parsed.rules()[0].placeholder(), "x");
}

#[test]
fn crlf_documents_parse() {
    let parsed = parse("# header\r\nfoo -> bar\r\nbaz -> qux\r\n").unwrap();
    assert_eq!(parsed, rule_set(&[("foo", "bar"), ("baz", "qux")]));
}
