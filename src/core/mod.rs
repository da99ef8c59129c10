pub mod curve;
pub mod dots;
pub mod grid;
pub mod labels;
pub mod path;
pub mod point_mapper;
pub mod scale;
pub mod types;

pub use curve::{CurveSegment, curve_segments};
pub use dots::{DotRect, plan_dots};
pub use grid::{AxisLine, GridLine, GridLineStyle, GridPlan, plan_grid, tick_fractions, tick_value};
pub use hit_test::{HitResult, hit_distance, nearest_point};
pub use labels::{LabelPlan, LabelSlot, layout_labels, max_labels, plan_labels};
pub use path::{PathCommand, PathSpec, build_mask_path, build_series_path};
pub use point_mapper::{line_gap, map_points, value_to_y};
pub use scale::{Domain, ScaleMode, resolve_domain, rounded_top};
pub use types::{DataArea, DataItem, Insets, Point, Rect, Viewport};
