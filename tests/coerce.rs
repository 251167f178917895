use ordered_float::OrderedFloat;
use sequery::coerce::{parse_numeric, safe_to_double};
use sequery::*;
use std::borrow::Cow;

#[test]
fn test_numeric_kinds() {
    assert_eq!(safe_to_double(&7i8), 7.0);
    assert_eq!(safe_to_double(&-7i16), -7.0);
    assert_eq!(safe_to_double(&70_000u32), 70_000.0);
    assert_eq!(safe_to_double(&(1u64 << 40)), 1_099_511_627_776.0);
    assert_eq!(safe_to_double(&3usize), 3.0);
    assert_eq!(safe_to_double(&0.25f32), 0.25);
    assert_eq!(safe_to_double(&f64::INFINITY), f64::INFINITY);
    assert!(safe_to_double(&f64::NAN).is_nan());
}

#[test]
fn test_bool_and_char() {
    assert_eq!(safe_to_double(&true), 1.0);
    assert_eq!(safe_to_double(&false), 0.0);
    assert_eq!(safe_to_double(&'0'), 0.0);
    assert_eq!(safe_to_double(&'5'), 5.0);
    assert_eq!(safe_to_double(&'a'), 0.0);
    assert_eq!(safe_to_double(&'-'), 0.0);
}

#[test]
fn test_currency_strings() {
    assert_eq!(safe_to_double("$1.99"), 1.99);
    assert_eq!(safe_to_double("2,500.50"), 2500.5);
    assert_eq!(safe_to_double(" 42 "), 42.0);
    assert_eq!(safe_to_double("1e3"), 1000.0);
    assert_eq!(safe_to_double(&String::from("$3")), 3.0);
    assert_eq!(safe_to_double(&Cow::Borrowed("$,4")), 4.0);
}

#[test]
fn test_unparseable_strings_are_zero() {
    for s in ["", "   ", "$", "abc", "1.2.3", "12abc", "--1"] {
        assert_eq!(safe_to_double(s), 0.0, "input {s:?}");
    }
}

#[test]
fn test_strict_parse() {
    assert_eq!(parse_numeric("$1,000").unwrap(), 1000.0);
    assert!(parse_numeric("twelve").is_err());
    assert!(parse_numeric("$").is_err());
}

#[test]
fn test_wrappers() {
    let boxed: Box<str> = "$9".into();
    assert_eq!(safe_to_double(&boxed), 9.0);
    assert_eq!(safe_to_double(&&&5i32), 5.0);
    assert_eq!(safe_to_double(&Some("3.5")), 3.5);
    assert_eq!(safe_to_double(&None::<&str>), 0.0);
}

#[test]
fn test_coercible_conversions() {
    assert_eq!(Coercible::from(2.5), Coercible::Number(2.5));
    assert_eq!(Coercible::from(3i64), Coercible::Number(3.0));
    assert_eq!(Coercible::from(true), Coercible::Bool(true));
    assert_eq!(Coercible::from('8'), Coercible::Char('8'));
    assert_eq!(Coercible::from("x").to_double(), 0.0);
    assert_eq!(Coercible::from(String::from("$5")).to_double(), 5.0);
}

#[test]
fn test_coercible_serde_roundtrip() {
    let values = vec![
        Coercible::Number(1.0),
        Coercible::Bool(false),
        Coercible::from("$2.50"),
    ];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"[1.0,false,"$2.50"]"#);
    let back: Vec<Coercible<'_>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
}

#[test]
fn test_coerced_values_order_totally() {
    let raw = ["$3", "1", "bad", "2,0"];
    let mut keys: Vec<OrderedFloat<f64>> = raw
        .iter()
        .map(|s| OrderedFloat(safe_to_double(*s)))
        .collect();
    keys.sort();
    let sorted: Vec<f64> = keys.into_iter().map(OrderedFloat::into_inner).collect();
    assert_eq!(sorted, vec![0.0, 1.0, 3.0, 20.0]);
}
