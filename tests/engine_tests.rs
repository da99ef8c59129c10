use linechart_rs::api::{ChartConfig, LineChartEngine};
use linechart_rs::core::{DataItem, Insets, PathCommand, ScaleMode, Viewport};
use linechart_rs::render::{ArtifactKind, NullRenderer, PathRole, Primitive};

fn reference_series() -> Vec<DataItem> {
    vec![
        DataItem::new(10, "1"),
        DataItem::new(50, "2"),
        DataItem::new(90, "3"),
        DataItem::new(500, "4"),
    ]
}

fn engine(config: ChartConfig) -> LineChartEngine<NullRenderer> {
    LineChartEngine::new(NullRenderer::default(), Viewport::new(440, 340), config)
        .expect("engine init")
}

#[test]
fn invalid_inputs_are_rejected() {
    let result = LineChartEngine::new(
        NullRenderer::default(),
        Viewport::new(0, 300),
        ChartConfig::default(),
    );
    assert!(result.is_err());

    let mut engine = engine(ChartConfig::default());
    assert!(engine.set_viewport_size(100, 0).is_err());
    assert!(
        engine
            .set_config(ChartConfig::default().with_min_label_width(0.0))
            .is_err()
    );
    assert_eq!(engine.config(), ChartConfig::default());
}

#[test]
fn empty_series_produces_empty_plan() {
    let mut engine = engine(ChartConfig::default());
    assert!(engine.recompute().is_empty());
    assert!(engine.layout().is_none());
    assert!(engine.points().is_empty());

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_artifact_count, 0);
}

#[test]
fn reference_series_layout() {
    let mut engine = engine(ChartConfig::default());
    engine.set_series(reference_series());
    engine.recompute();

    let layout = engine.layout().expect("layout");
    // right inset grows to half the 40px label width when the last label shows.
    assert_eq!(layout.insets.right, 20.0);
    assert_eq!(layout.data_area.width, 380.0);
    assert_eq!(layout.data_area.height, 260.0);

    let domain = engine.domain().expect("domain");
    assert_eq!(domain.mode, ScaleMode::RoundedTop);
    assert_eq!((domain.min, domain.max), (0.0, 600.0));

    let points = engine.points();
    assert_eq!(points.len(), 4);
    assert!((points[3].x - 380.0).abs() <= 1e-9);
    assert!((points[3].y - 260.0 * (1.0 - 500.0 / 600.0)).abs() <= 1e-9);

    assert_eq!(layout.grid.lines[2].value, 300);

    let plan = engine.render_plan();
    // axis line + five (line, tick text) pairs
    assert_eq!(plan.count_of(ArtifactKind::Grid), 11);
    // gradient mask + series stroke
    assert_eq!(plan.count_of(ArtifactKind::Line), 2);
    assert_eq!(plan.count_of(ArtifactKind::Dot), 8);
    assert_eq!(plan.count_of(ArtifactKind::Label), 4);
    assert_eq!(plan.count_of(ArtifactKind::Highlight), 0);

    engine.render().expect("render");
    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(engine.renderer().last_dot_count, 8);
}

#[test]
fn setters_do_not_recompute_implicitly() {
    let mut engine = engine(ChartConfig::default());
    engine.set_series(reference_series());
    engine.recompute();

    engine.set_series(vec![DataItem::new(1, "a"), DataItem::new(2, "b")]);
    assert_eq!(engine.points().len(), 4);
    assert_eq!(engine.layout().expect("layout").items.len(), 4);

    engine.recompute();
    assert_eq!(engine.points().len(), 2);
}

#[test]
fn single_item_renders_grid_and_label_only() {
    let mut engine = engine(ChartConfig::default());
    engine.set_series(vec![DataItem::new(42, "only")]);
    let plan = engine.recompute();

    assert_eq!(plan.count_of(ArtifactKind::Grid), 5);
    assert_eq!(plan.count_of(ArtifactKind::Line), 0);
    assert_eq!(plan.count_of(ArtifactKind::Dot), 0);
    assert_eq!(plan.count_of(ArtifactKind::Label), 1);
    assert!(engine.points().is_empty());
}

#[test]
fn config_toggles_shape_the_plan() {
    let config = ChartConfig::default()
        .with_curved(true)
        .with_gradient(false)
        .with_dots(false, 10.0, 8.0);
    let mut engine = engine(config);
    engine.set_series(reference_series());
    let plan = engine.recompute();

    assert_eq!(plan.count_of(ArtifactKind::Dot), 0);
    let paths: Vec<_> = plan
        .of_kind(ArtifactKind::Line)
        .filter_map(|primitive| match primitive {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
        .collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].role, PathRole::Series);
    assert!(
        paths[0]
            .path
            .commands
            .iter()
            .any(|command| matches!(command, PathCommand::CubicTo { .. }))
    );
    assert!(engine.layout().expect("layout").mask_path.is_none());
}

#[test]
fn hiding_last_label_keeps_configured_right_inset() {
    let config = ChartConfig::default()
        .with_show_last_label(false)
        .with_insets(Insets::new(40.0, 40.0, 40.0, 5.0));
    let mut engine = engine(config);
    engine.set_series(reference_series());
    engine.recompute();

    let layout = engine.layout().expect("layout");
    assert_eq!(layout.insets.right, 5.0);
    assert_eq!(layout.data_area.width, 395.0);
}

#[test]
fn viewport_smaller_than_insets_yields_empty_pass_and_recovers() {
    let mut engine = engine(ChartConfig::default());
    engine.set_series(reference_series());
    engine.set_viewport_size(50, 50).expect("viewport");
    assert!(engine.recompute().is_empty());
    assert!(engine.layout().is_none());

    engine.set_viewport_size(440, 340).expect("viewport");
    assert!(!engine.recompute().is_empty());
    assert_eq!(engine.points().len(), 4);
}

#[test]
fn recompute_replaces_previous_artifacts() {
    let mut engine = engine(ChartConfig::default());
    engine.set_series(reference_series());
    let first = engine.recompute().artifacts.len();
    let second = engine.recompute().artifacts.len();
    assert_eq!(first, second);
}

#[test]
fn values_near_i64_max_recompute_without_overflow() {
    let mut engine = engine(ChartConfig::default());
    engine.set_series(vec![DataItem::new(1, "a"), DataItem::new(i64::MAX - 10, "b")]);
    engine.recompute();

    let domain = engine.domain().expect("domain");
    assert_eq!(domain.mode, ScaleMode::MinMax);
    assert_eq!(engine.points().len(), 2);
    engine.render_plan().validate().expect("valid plan");
    engine.render().expect("render");

    engine.set_series(vec![DataItem::new(i64::MIN, "lo"), DataItem::new(i64::MAX, "hi")]);
    engine.recompute();
    let layout = engine.layout().expect("layout");
    assert_eq!(layout.grid.lines[0].value, i64::MAX);
    assert_eq!(layout.grid.lines[1].value, i64::MIN);
    engine.render().expect("render");
}
