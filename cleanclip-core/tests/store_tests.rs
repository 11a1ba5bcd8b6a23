// cleanclip-core/tests/store_tests.rs
//! Storage boundary: fallback to defaults, reseeding and wholesale replacement.

use anyhow::Result;
use cleanclip_core::{
    decode_stored_rules, encode_stored_rules, parse, CleanclipError, MemoryRuleStore, Rule,
    RuleSet, RuleStore,
};
use test_log::test;

#[test]
fn empty_store_is_seeded_with_defaults() -> Result<()> {
    let store = MemoryRuleStore::new();
    let rules = store.load_rule_set()?;

    assert_eq!(rules, RuleSet::load_default_rules()?);
    let persisted = store.document().expect("defaults should be written back");
    assert_eq!(decode_stored_rules(&persisted), Some(rules));
    Ok(())
}

#[test]
fn corrupt_documents_fall_back_to_defaults() -> Result<()> {
    let defaults = RuleSet::load_default_rules()?;
    for document in [
        "{ definitely not json",
        r#"{"pattern": "a", "placeholder": "b"}"#,
        "[]",
        r#"[{"pattern": "a"}, {"placeholder": "b"}]"#,
        "42",
    ] {
        let store = MemoryRuleStore::with_document(document);
        assert_eq!(store.load_rule_set()?, defaults, "document: {document}");
        assert_eq!(store.document(), Some(encode_stored_rules(&defaults)?));
    }
    Ok(())
}

#[test]
fn valid_document_is_returned_as_stored() -> Result<()> {
    let store = MemoryRuleStore::with_document(
        r#"[{"pattern": "foo", "placeholder": "bar"}, {"pattern": "x+", "placeholder": "y"}]"#,
    );
    let rules = store.load_rule_set()?;
    let pairs: Vec<(&str, &str)> = rules.iter().map(|r| (r.pattern(), r.placeholder())).collect();
    assert_eq!(pairs, vec![("foo", "bar"), ("x+", "y")]);
    Ok(())
}

#[test]
fn save_replaces_the_whole_set() -> Result<()> {
    let store = MemoryRuleStore::new();
    store.load_rule_set()?;

    let edited = RuleSet::new(vec![Rule::new("only", "one")?])?;
    store.save_rule_set(&edited)?;
    assert_eq!(store.load_rule_set()?, edited);
    Ok(())
}

#[test]
fn rejected_edit_leaves_store_untouched() -> Result<()> {
    let store = MemoryRuleStore::new();
    let before = store.load_rule_set()?;
    let document_before = store.document();

    let edit = "# my rules\nvalid -> ok\nbroken line\n";
    let result = parse(edit).and_then(|rules| store.save_rule_set(&rules));
    assert!(matches!(result, Err(CleanclipError::MissingSeparator { .. })));

    assert_eq!(store.document(), document_before);
    assert_eq!(store.load_rule_set()?, before);
    Ok(())
}
