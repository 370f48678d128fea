//! Tests for recipe encoding and decoding.

use proptest::prelude::*;
use rxb_builder::{
    CaseSensitivity, DecodeError, ExpressionRecord, Flag, PatternBuilder, RecipeRecord, decode,
    encode,
};

fn employee_builder() -> PatternBuilder {
    let mut builder = PatternBuilder::new();
    builder
        .then("mployee")
        .then("[0-9]+")
        .optional("X")
        .character_range('a', 'f')
        .unwrap()
        .starts_with("E")
        .ends_with("[0-9]")
        .case_sensitive(true);
    builder
}

fn is_match(builder: &PatternBuilder, text: &str) -> bool {
    builder.to_regex().unwrap().is_match(text).unwrap()
}

#[test]
fn record_shape_is_stable() {
    insta::assert_json_snapshot!(employee_builder().to_record(), @r#"
    {
      "startsWith": "E",
      "endsWith": "[0-9]",
      "caseSensitive": "true",
      "expressions": [
        {
          "pattern": "mployee"
        },
        {
          "pattern": "[0-9]+"
        },
        {
          "pattern": "(?:X)?"
        },
        {
          "pattern": "[a-f]"
        }
      ]
    }
    "#);
}

#[test]
fn json_round_trip_preserves_matching() {
    let original = employee_builder();
    let json = original.to_json().unwrap();
    let restored = PatternBuilder::from_json(&json).unwrap();

    assert_eq!(restored.pattern(), "^Employee[0-9]+(?:X)?[a-f][0-9]$");
    assert_eq!(restored.pattern(), original.pattern());
    assert!(is_match(&restored, "Employee4a3"));
    assert!(is_match(&restored, "Employee2Xf1"));
    assert!(!is_match(&restored, "employee4a3"));
    assert!(!is_match(&restored, "Employee4k3"));
}

#[test]
fn value_round_trip() {
    let mut original = PatternBuilder::with_flags([Flag::MultiLine]);
    original.starts_with("a").word().case_sensitive(false);

    let value = original.to_value().unwrap();
    assert_eq!(value["caseSensitive"], "false");
    assert_eq!(value["flags"], "m");

    let restored = rxb_builder::decode_value(value).unwrap();
    assert_eq!(restored.pattern(), original.pattern());
    assert_eq!(restored.flags(), original.flags());
}

#[test]
fn untoggled_builder_stays_case_sensitive() {
    let mut original = PatternBuilder::new();
    original.then("Abc");

    let record = encode(&original);
    assert_eq!(record.case_sensitive, Some(CaseSensitivity::Sensitive));
    assert_eq!(record.flags, None);

    let restored = decode(&record).unwrap();
    assert!(restored.is_case_sensitive());
    assert!(!is_match(&restored, "abc"));
}

#[test]
fn decode_replays_in_fixed_order() {
    let record = RecipeRecord {
        starts_with: Some("<".to_string()),
        ends_with: Some(">".to_string()),
        case_sensitive: None,
        flags: None,
        expressions: vec![
            ExpressionRecord {
                pattern: "b".to_string(),
            },
            ExpressionRecord {
                pattern: "a".to_string(),
            },
        ],
    };
    let builder = decode(&record).unwrap();
    assert_eq!(builder.pattern(), "^<ba>$");
    assert!(!builder.is_case_sensitive());
    assert_eq!(builder.recipe().steps.len(), 2);
}

#[test]
fn decode_rejects_malformed_records() {
    for json in [
        "not json",
        r#"{"startsWith":"a"}"#,
        r#"{"expressions":"a"}"#,
        r#"{"expressions":[{"fragment":"a"}]}"#,
        r#"{"caseSensitive":"maybe","expressions":[]}"#,
        "[]",
    ] {
        let result = PatternBuilder::from_json(json);
        assert!(
            matches!(result, Err(DecodeError::Malformed(_))),
            "{json} should be rejected"
        );
    }
}

#[test]
fn decode_rejects_unknown_flags() {
    let result = PatternBuilder::from_json(r#"{"flags":"g","expressions":[]}"#);
    assert!(matches!(result, Err(DecodeError::InvalidFlag('g'))));
}

#[derive(Debug, Clone)]
enum Op {
    Then(String),
    StartsWith(String),
    EndsWith(String),
    Optional(String),
    Group(String),
    CanMatch(Vec<String>),
    Or(String),
    Repeat(String, usize),
    Digits,
    Space,
    OneOrMore,
    CaseSensitive(bool),
    MultiLine,
}

fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,4}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        literal().prop_map(Op::Then),
        literal().prop_map(Op::StartsWith),
        literal().prop_map(Op::EndsWith),
        literal().prop_map(Op::Optional),
        literal().prop_map(Op::Group),
        prop::collection::vec(literal(), 1..4).prop_map(Op::CanMatch),
        literal().prop_map(Op::Or),
        (literal(), 1usize..4).prop_map(|(s, n)| Op::Repeat(s, n)),
        Just(Op::Digits),
        Just(Op::Space),
        Just(Op::OneOrMore),
        any::<bool>().prop_map(Op::CaseSensitive),
        Just(Op::MultiLine),
    ]
}

fn apply(builder: &mut PatternBuilder, op: &Op) {
    match op {
        Op::Then(s) => builder.then(s),
        Op::StartsWith(s) => builder.starts_with(s),
        Op::EndsWith(s) => builder.ends_with(s),
        Op::Optional(s) => builder.optional(s),
        Op::Group(s) => builder.group(s),
        Op::CanMatch(items) => builder.can_match(items),
        Op::Or(s) => builder.or(s),
        Op::Repeat(s, n) => builder.repeat(s, *n),
        Op::Digits => builder.numbers(),
        Op::Space => builder.space(),
        Op::OneOrMore => builder.then("x").one_or_more_times(),
        Op::CaseSensitive(sensitive) => builder.case_sensitive(*sensitive),
        Op::MultiLine => builder.flag(Flag::MultiLine),
    };
}

proptest! {
    #[test]
    fn round_trip_preserves_pattern_and_flags(
        ops in prop::collection::vec(op(), 0..12),
        probes in prop::collection::vec("[a-zA-Z0-9 x]{0,12}", 1..6),
    ) {
        let mut original = PatternBuilder::new();
        for op in &ops {
            apply(&mut original, op);
        }

        let json = original.to_json().unwrap();
        let restored = PatternBuilder::from_json(&json).unwrap();

        prop_assert_eq!(restored.pattern(), original.pattern());
        prop_assert_eq!(restored.flags(), original.flags());
        prop_assert_eq!(&restored.recipe().steps, &original.recipe().steps);

        let before = original.to_regex().unwrap();
        let after = restored.to_regex().unwrap();
        for probe in &probes {
            prop_assert_eq!(before.is_match(probe).unwrap(), after.is_match(probe).unwrap());
        }
    }
}
