mod artifact;
mod frame;
mod null_renderer;
mod primitives;

pub use artifact::{ArtifactKind, Primitive, RenderArtifact};
pub use frame::RenderPlan;
pub use null_renderer::NullRenderer;
pub use primitives::{
    LinePrimitive, LineStrokeStyle, PathPrimitive, PathRole, RectPrimitive, RectRole,
    TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderPlan` so drawing code stays
/// isolated from chart geometry and interaction logic.
pub trait Renderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()>;
}
