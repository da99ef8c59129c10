use linechart_rs::core::{
    DataArea, DataItem, Insets, LabelPlan, layout_labels, max_labels, plan_labels,
};

fn shown(plan: &LabelPlan) -> Vec<usize> {
    plan.indices.iter().copied().collect()
}

#[test]
fn crowded_labels_follow_stride_and_keep_last() {
    assert_eq!(max_labels(100.0, 30.0), 3);

    let plan = plan_labels(10, 100.0, 30.0, true);
    assert!(plan.crowded);
    assert_eq!(shown(&plan), vec![0, 4, 8, 9]);
    assert_eq!(plan.label_width, 30.0);
}

#[test]
fn crowded_labels_drop_last_when_disabled() {
    let plan = plan_labels(10, 100.0, 30.0, false);
    assert_eq!(shown(&plan), vec![0, 4, 8]);
}

#[test]
fn uncrowded_labels_show_everything_at_line_gap_width() {
    let plan = plan_labels(4, 300.0, 30.0, false);
    assert!(!plan.crowded);
    assert_eq!(shown(&plan), vec![0, 1, 2, 3]);
    assert_eq!(plan.label_width, 100.0);
}

#[test]
fn empty_and_single_series() {
    assert!(plan_labels(0, 300.0, 30.0, true).is_empty());

    let single = plan_labels(1, 300.0, 30.0, false);
    assert_eq!(shown(&single), vec![0]);
    assert_eq!(single.label_width, 30.0);
}

#[test]
fn narrow_area_still_shows_first_label() {
    let plan = plan_labels(5, 10.0, 30.0, false);
    assert!(plan.contains(0));
    assert_eq!(plan.len(), 1);
}

#[test]
fn label_rects_are_centered_under_points() {
    let items: Vec<DataItem> = ["a", "b", "c"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| DataItem::new(i as i64, label))
        .collect();
    let area = DataArea::new(200.0, 100.0);
    let insets = Insets::new(40.0, 10.0, 40.0, 0.0);
    let plan = plan_labels(items.len(), area.width, 30.0, true);

    let slots = layout_labels(&plan, &items, area, insets);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[1].text, "b");
    assert!((slots[1].rect.center().x - 140.0).abs() <= 1e-9);
    assert!((slots[1].rect.width - 100.0).abs() <= 1e-9);
    // top inset + area height + half the bottom inset.
    assert!((slots[1].rect.center().y - 130.0).abs() <= 1e-9);
}
