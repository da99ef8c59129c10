use tracing::{debug, warn};

use crate::core::{DataItem, Domain, Point, Viewport};
use crate::error::ChartResult;
use crate::interaction::{Highlight, InteractionState};
use crate::render::{ArtifactKind, RenderPlan, Renderer};

use super::chart_layout::resolve_chart_layout;
use super::render_plan_builder::{push_layout_artifacts, refresh_highlight_artifacts};
use super::validation::{validate_chart_config, validate_viewport};
use super::{ChartConfig, ChartLayout};

/// Main orchestration facade consumed by host applications.
///
/// Setters only store inputs. Geometry is rebuilt by an explicit
/// [`LineChartEngine::recompute`] call, and pointer events are resolved
/// against the points of the last recompute.
pub struct LineChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) config: ChartConfig,
    pub(super) items: Vec<DataItem>,
    pub(super) layout: Option<ChartLayout>,
    pub(super) plan: RenderPlan,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> LineChartEngine<R> {
    pub fn new(renderer: R, viewport: Viewport, config: ChartConfig) -> ChartResult<Self> {
        let viewport = validate_viewport(viewport)?;
        let config = validate_chart_config(config)?;
        Ok(Self {
            renderer,
            viewport,
            config,
            items: Vec::new(),
            layout: None,
            plan: RenderPlan::new(viewport),
            interaction: InteractionState::default(),
        })
    }

    /// Rebuilds every derived artifact from the current inputs.
    ///
    /// All artifact kinds are cleared before anything is rebuilt, so the plan
    /// and point set never mix two passes. A failing stage leaves the plan
    /// empty for this pass; the next valid input recovers.
    pub fn recompute(&mut self) -> &RenderPlan {
        for kind in ArtifactKind::LAYOUT {
            self.plan.clear_kind(kind);
        }
        self.plan.clear_kind(ArtifactKind::Highlight);
        self.plan.viewport = self.viewport;
        self.layout = None;
        if self.interaction.clear_highlight() {
            debug!("highlight dropped by recompute");
        }

        match resolve_chart_layout(&self.items, self.viewport, &self.config) {
            Ok(Some(layout)) => {
                push_layout_artifacts(&mut self.plan, &layout);
                self.layout = Some(layout);
            }
            Ok(None) => debug!("empty series; render plan left empty"),
            Err(err) => warn!(error = %err, "skipping layout pass"),
        }

        debug!(artifacts = self.plan.artifacts.len(), "recompute finished");
        &self.plan
    }

    /// Hands the current plan to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.plan)
    }

    pub(super) fn refresh_highlight(&mut self) {
        refresh_highlight_artifacts(
            &mut self.plan,
            self.layout.as_ref(),
            self.interaction.highlight(),
            self.config.dot_outer_radius,
        );
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn items(&self) -> &[DataItem] {
        &self.items
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn render_plan(&self) -> &RenderPlan {
        &self.plan
    }

    #[must_use]
    pub fn domain(&self) -> Option<Domain> {
        self.layout.as_ref().map(|layout| layout.domain)
    }

    /// Points of the last recompute; empty before the first one.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.layout
            .as_ref()
            .map(|layout| layout.points.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.interaction.highlight()
    }

    /// Pointer session state, tracked even when no point is hit.
    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
