use crate::core::{Rect, labels::LABEL_HEIGHT};
use crate::interaction::Highlight;
use crate::render::{
    ArtifactKind, LinePrimitive, LineStrokeStyle, PathPrimitive, PathRole, Primitive,
    RectPrimitive, RectRole, RenderPlan, TextHAlign, TextPrimitive,
};

use super::ChartLayout;

/// Gap between tick text and the value-axis line.
const TICK_TEXT_PADDING: f64 = 4.0;
/// Gap between the highlight value text and the top of the highlight dot.
const HIGHLIGHT_TEXT_OFFSET: f64 = 4.0;

/// Pushes grid, series, dot and label artifacts for `layout`.
pub(super) fn push_layout_artifacts(plan: &mut RenderPlan, layout: &ChartLayout) {
    push_grid(plan, layout);
    push_series(plan, layout);
    push_dots(plan, layout);
    push_labels(plan, layout);
}

fn push_grid(plan: &mut RenderPlan, layout: &ChartLayout) {
    let origin = layout.origin();
    let axis = layout.grid.vertical_line;
    plan.push(
        ArtifactKind::Grid,
        Primitive::Line(LinePrimitive::new(
            origin.x + axis.x,
            origin.y + axis.top,
            origin.x + axis.x,
            origin.y + axis.bottom,
        )),
    );

    let text_width = (origin.x - TICK_TEXT_PADDING).max(0.0);
    for line in &layout.grid.lines {
        let y = origin.y + line.y;
        let stroke_style = if line.style.dashed {
            LineStrokeStyle::Dashed
        } else {
            LineStrokeStyle::Solid
        };
        plan.push(
            ArtifactKind::Grid,
            Primitive::Line(
                LinePrimitive::new(origin.x, y, origin.x + layout.data_area.width, y).with_stroke(
                    line.style.width,
                    line.style.opacity,
                    stroke_style,
                ),
            ),
        );
        plan.push(
            ArtifactKind::Grid,
            Primitive::Text(TextPrimitive::new(
                line.text.clone(),
                Rect::new(0.0, y - LABEL_HEIGHT / 2.0, text_width, LABEL_HEIGHT),
                TextHAlign::Right,
            )),
        );
    }
}

fn push_series(plan: &mut RenderPlan, layout: &ChartLayout) {
    let origin = layout.origin();
    if let Some(mask) = &layout.mask_path {
        plan.push(
            ArtifactKind::Line,
            Primitive::Path(PathPrimitive::new(mask.clone(), origin, PathRole::GradientMask)),
        );
    }
    if let Some(series) = &layout.series_path {
        plan.push(
            ArtifactKind::Line,
            Primitive::Path(PathPrimitive::new(series.clone(), origin, PathRole::Series)),
        );
    }
}

fn push_dots(plan: &mut RenderPlan, layout: &ChartLayout) {
    for dot in &layout.dots {
        plan.push(
            ArtifactKind::Dot,
            Primitive::Rect(RectPrimitive::new(dot.outer, RectRole::DotOuter)),
        );
        plan.push(
            ArtifactKind::Dot,
            Primitive::Rect(RectPrimitive::new(dot.inner, RectRole::DotInner)),
        );
    }
}

fn push_labels(plan: &mut RenderPlan, layout: &ChartLayout) {
    for slot in layout.labels.iter().filter(|slot| !slot.text.is_empty()) {
        plan.push(
            ArtifactKind::Label,
            Primitive::Text(TextPrimitive::new(slot.text.clone(), slot.rect, TextHAlign::Center)),
        );
    }
}

/// Replaces the highlight artifacts with the ones for `highlight`.
pub(super) fn refresh_highlight_artifacts(
    plan: &mut RenderPlan,
    layout: Option<&ChartLayout>,
    highlight: Option<&Highlight>,
    dot_size: f64,
) {
    plan.clear_kind(ArtifactKind::Highlight);
    let (Some(layout), Some(highlight)) = (layout, highlight) else {
        return;
    };

    let origin = layout.origin();
    let center = highlight.point.offset(origin.x, origin.y);

    if let Some(line) = highlight.vertical_line {
        plan.push(
            ArtifactKind::Highlight,
            Primitive::Line(LinePrimitive::new(
                origin.x + line.x,
                origin.y + line.top,
                origin.x + line.x,
                origin.y + line.bottom,
            )),
        );
    }

    let dot = Rect::centered_square(center, dot_size);
    plan.push(
        ArtifactKind::Highlight,
        Primitive::Rect(RectPrimitive::new(dot, RectRole::HighlightDot)),
    );

    let text_width = layout.label_plan.label_width.max(dot_size);
    plan.push(
        ArtifactKind::Highlight,
        Primitive::Text(TextPrimitive::new(
            highlight.item.value.to_string(),
            Rect::new(
                center.x - text_width / 2.0,
                dot.y - HIGHLIGHT_TEXT_OFFSET - LABEL_HEIGHT,
                text_width,
                LABEL_HEIGHT,
            ),
            TextHAlign::Center,
        )),
    );
}
