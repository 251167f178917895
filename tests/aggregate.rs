use anyhow::Result;
use sequery::aggregators::{AverageF64, Count, Max, Min, Sum};
use sequery::testing::assert_approx_eq;
use sequery::*;

fn numbers() -> Vec<i32> {
    (1..=10).collect()
}

#[test]
fn count_total_and_where() {
    let xs = numbers();
    assert_eq!(from_slice(&xs).count(), 10);
    assert_eq!(from_slice::<i32>(&[]).count(), 0);
    assert_eq!(absent::<i32>().count(), 0);

    assert_eq!(from_slice(&xs).count_where(|n| n % 2 != 0), 5);
    assert_eq!(from_slice(&xs).count_where(|n| *n > 100), 0);
    assert_eq!(from_slice::<i32>(&[]).count_where(|_| true), 0);
}

#[test]
fn sum_numbers_and_selector() {
    let xs = numbers();
    assert_eq!(from_slice(&xs).sum(), 55.0);
    assert_eq!(from_slice(&xs).sum_by(|n| n * 2), 110.0);
    assert_eq!(from_slice(&[1, 2, 3, 4, 5]).sum(), 15.0);
}

#[test]
fn sum_numeric_strings() {
    let strs = vec!["1", "2.5", "3.75"];
    assert_approx_eq(from_slice(&strs).sum(), 7.25, 1e-9);

    let prices = vec!["$1.99", "2,500.50", "3.75"];
    assert_approx_eq(from_slice(&prices).sum(), 2506.24, 1e-9);

    let owned: Vec<String> = prices.iter().map(|s| format!("  {s} ")).collect();
    assert_approx_eq(from_slice(&owned).sum(), 2506.24, 1e-9);

    let spaced = vec!["$ 5", "$ 1,234.50"];
    assert_approx_eq(from_slice(&spaced).sum(), 1239.5, 1e-9);
}

#[test]
fn unparseable_values_count_as_zero() {
    let strs = vec!["10", "ten", "", "$", "5"];
    assert_eq!(from_slice(&strs).sum(), 15.0);
    assert_eq!(from_slice(&strs).average(), 3.0);
}

#[test]
fn sum_empty_or_absent() {
    assert_eq!(from_slice::<i32>(&[]).sum(), 0.0);
    assert_eq!(absent::<i32>().sum(), 0.0);
    assert_eq!(absent::<i32>().sum_by(|n| *n), 0.0);
}

#[test]
fn min_max_numbers_and_selector() {
    let xs = numbers();
    assert_eq!(from_slice(&xs).min(), 1.0);
    assert_eq!(from_slice(&xs).max(), 10.0);

    let words = vec!["a", "bb", "ccc", "d"];
    assert_eq!(from_slice(&words).min_by(|s| s.len()), 1.0);
    assert_eq!(from_slice(&words).max_by(|s| s.len()), 3.0);
}

#[test]
fn min_max_negative_values() {
    let xs = vec![-4.5, 2.0, -10.25, 3.0];
    assert_eq!(from_slice(&xs).min(), -10.25);
    assert_eq!(from_slice(&xs).max(), 3.0);
}

/// Known ambiguity: an empty source reports `0.0`, the same as a source whose
/// extreme really is `0.0`. Callers that need to distinguish must check `any`.
#[test]
fn min_max_empty_is_indistinguishable_from_zero() {
    let zeros = vec![0, 0];
    assert_eq!(from_slice::<i32>(&[]).min(), 0.0);
    assert_eq!(from_slice::<i32>(&[]).max(), 0.0);
    assert_eq!(absent::<i32>().min(), 0.0);
    assert_eq!(absent::<i32>().max(), 0.0);
    assert_eq!(from_slice(&zeros).min(), absent::<i32>().min());
    assert!(from_slice(&zeros).any() && !absent::<i32>().any());
}

#[test]
fn average_numbers_and_selector() {
    let xs = numbers();
    assert_eq!(from_slice(&xs).average(), 5.5);
    assert_eq!(from_slice(&xs).average_by(|n| n * 2), 11.0);
    assert_eq!(from_slice::<i32>(&[]).average(), 0.0);
    assert_eq!(absent::<i32>().average(), 0.0);
}

#[test]
fn booleans_and_digits_coerce() {
    let flags = vec![true, false, true, true];
    assert_eq!(from_slice(&flags).sum(), 3.0);
    assert_eq!(from_slice(&flags).average(), 0.75);

    let digits = vec!['1', '9', 'x'];
    assert_eq!(from_slice(&digits).sum(), 10.0);
    assert_eq!(from_slice(&digits).min(), 0.0);
}

#[test]
fn mixed_values_through_coercible() -> Result<()> {
    let mixed: Vec<Coercible<'_>> = serde_json::from_str(r#"[2, true, "3", "$1,000.50", "oops"]"#)?;
    assert_approx_eq(from_slice(&mixed).sum(), 1006.5, 1e-9);
    assert_eq!(from_slice(&mixed).max(), 1000.5);
    Ok(())
}

#[cfg(feature = "json")]
#[test]
fn json_values_aggregate() -> Result<()> {
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(r#"[{"price": "$4.50"}, {"price": 5}, {"price": null}, {}]"#)?;
    let total = from_slice(&rows).sum_by(|r| r["price"].clone());
    assert_eq!(total, 9.5);
    Ok(())
}

#[test]
fn optional_values_contribute_zero() {
    let xs = vec![Some(2), None, Some(4)];
    assert_eq!(from_slice(&xs).sum(), 6.0);
    assert_eq!(from_slice(&xs).average(), 2.0);
}

#[test]
fn explicit_combiners() {
    let xs = vec![4, 8, 6];
    let seq = from_slice(&xs);
    assert_eq!(seq.aggregate(Sum), 18.0);
    assert_eq!(seq.aggregate(Min), 4.0);
    assert_eq!(seq.aggregate(Max), 8.0);
    assert_eq!(seq.aggregate(AverageF64), 6.0);
    assert_eq!(seq.aggregate(Count), 3);
    assert_eq!(seq.aggregate_by(|n| n / 2, Sum), 9.0);
}

#[test]
fn combine_all_on_raw_values() {
    assert_eq!(Sum.combine_all([1.0, 2.0, 3.5]), 6.5);
    assert_eq!(Max.combine_all(Vec::<f64>::new()), 0.0);
    assert_eq!(AverageF64.combine_all([2.0, 4.0]), 3.0);
}
