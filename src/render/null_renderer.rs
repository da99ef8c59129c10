use crate::error::ChartResult;
use crate::render::{ArtifactKind, RenderPlan, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates plan content so tests can catch invalid geometry before
/// a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_artifact_count: usize,
    pub last_label_count: usize,
    pub last_dot_count: usize,
    pub last_highlight_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()> {
        plan.validate()?;
        self.render_count += 1;
        self.last_artifact_count = plan.artifacts.len();
        self.last_label_count = plan.count_of(ArtifactKind::Label);
        self.last_dot_count = plan.count_of(ArtifactKind::Dot);
        self.last_highlight_count = plan.count_of(ArtifactKind::Highlight);
        Ok(())
    }
}
