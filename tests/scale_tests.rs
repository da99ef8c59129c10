use linechart_rs::core::{DataItem, Domain, ScaleMode, resolve_domain, rounded_top};

fn series(values: &[i64]) -> Vec<DataItem> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataItem::new(*value, (i + 1).to_string()))
        .collect()
}

#[test]
fn empty_series_has_no_domain() {
    assert!(resolve_domain(&[]).is_none());
}

#[test]
fn rounded_top_domain_for_reference_series() {
    let domain = resolve_domain(&series(&[10, 50, 90, 500])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::RoundedTop);
    assert_eq!(domain.min, 0.0);
    assert_eq!(domain.max, 600.0);
}

#[test]
fn rounded_top_rounds_remainder_above_half_up() {
    // 560 -> base 500, remainder 60 -> 600, not below 560 -> +100.
    assert_eq!(rounded_top(560), Some(700));
    // 540 -> base 500 stays, below 540 -> +200.
    assert_eq!(rounded_top(540), Some(700));
    assert_eq!(rounded_top(1_000), Some(1_100));
}

#[test]
fn single_item_uses_rounded_top() {
    let domain = resolve_domain(&series(&[42])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::RoundedTop);
    assert_eq!(domain.max, 200.0);
}

#[test]
fn negative_values_fall_back_to_min_max_with_headroom() {
    let domain = resolve_domain(&series(&[-50, 0, 50])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::MinMax);
    assert_eq!(domain.min, -50.0);
    assert!((domain.max - 60.0).abs() <= 1e-9);
}

#[test]
fn flat_negative_series_gets_minimum_span() {
    let domain = resolve_domain(&series(&[-5, -5, -5])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::MinMax);
    assert_eq!(domain.min, -5.0);
    assert_eq!(domain.max, -4.0);
}

#[test]
fn domain_constructor_rejects_inverted_range() {
    assert!(Domain::new(10.0, 10.0, ScaleMode::MinMax).is_err());
    assert!(Domain::new(10.0, 5.0, ScaleMode::MinMax).is_err());
    assert!(Domain::new(f64::NAN, 5.0, ScaleMode::MinMax).is_err());
}

#[test]
fn rounded_top_overflow_falls_back_to_min_max() {
    assert_eq!(rounded_top(i64::MAX - 10), None);

    let domain = resolve_domain(&series(&[1, i64::MAX - 10])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::MinMax);
    assert_eq!(domain.min, 1.0);
    assert!(domain.max.is_finite());
    assert!(domain.max > (i64::MAX - 10) as f64);
}

#[test]
fn full_i64_range_resolves_to_finite_domain() {
    let domain = resolve_domain(&series(&[i64::MIN, i64::MAX])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::MinMax);
    assert_eq!(domain.min, i64::MIN as f64);
    assert!(domain.max.is_finite());
    assert!(domain.span() > 0.0);
}

#[test]
fn flat_series_at_i64_max_keeps_distinct_bounds() {
    let domain = resolve_domain(&series(&[i64::MAX])).expect("domain");
    assert_eq!(domain.mode, ScaleMode::MinMax);
    assert!(domain.max > domain.min);
}
