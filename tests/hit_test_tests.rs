use linechart_rs::core::{Point, hit_distance, nearest_point};

#[test]
fn empty_point_set_has_no_hit() {
    assert!(nearest_point(Point::new(10.0, 10.0), &[]).is_none());
}

#[test]
fn single_point_always_wins() {
    let points = [Point::new(50.0, 20.0)];
    for pointer in [
        Point::new(-1_000.0, 300.0),
        Point::new(50.0, 20.0),
        Point::new(9_999.0, -50.0),
    ] {
        let hit = nearest_point(pointer, &points).expect("hit");
        assert_eq!(hit.index, 0);
        assert_eq!(hit.point, points[0]);
    }
}

#[test]
fn nearest_point_is_chosen_by_horizontal_distance() {
    let points = [
        Point::new(0.0, 10.0),
        Point::new(100.0, 90.0),
        Point::new(200.0, 40.0),
    ];
    let hit = nearest_point(Point::new(140.0, 90.0), &points).expect("hit");
    assert_eq!(hit.index, 1);
    assert!((hit.distance - hit_distance(Point::new(140.0, 90.0), points[1])).abs() <= 1e-12);
}

#[test]
fn vertical_term_uses_pointer_height_only() {
    let distance = hit_distance(Point::new(3.0, 4.0), Point::new(0.0, 1_000.0));
    assert!((distance - 5.0).abs() <= 1e-12);
}
