use linechart_rs::core::{DataItem, ScaleMode, resolve_domain};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rounded_top_is_a_hundred_multiple_above_max(
        values in proptest::collection::vec(0i64..1_000_000, 1..64)
    ) {
        let items: Vec<DataItem> = values.iter().map(|v| DataItem::new(*v, "x")).collect();
        let domain = resolve_domain(&items).expect("domain");
        let max = *values.iter().max().expect("non-empty");

        prop_assert_eq!(domain.mode, ScaleMode::RoundedTop);
        prop_assert_eq!(domain.min, 0.0);
        prop_assert_eq!((domain.max as i64) % 100, 0);
        prop_assert!(domain.max > max as f64);
    }

    #[test]
    fn resolved_domain_is_never_degenerate(
        values in proptest::collection::vec(-10_000i64..10_000, 1..64)
    ) {
        let items: Vec<DataItem> = values.iter().map(|v| DataItem::new(*v, "x")).collect();
        let domain = resolve_domain(&items).expect("domain");
        let min = *values.iter().min().expect("non-empty") as f64;
        let max = *values.iter().max().expect("non-empty") as f64;

        prop_assert!(domain.max > domain.min);
        prop_assert!(domain.min <= min);
        prop_assert!(domain.max >= max);
    }
}
