use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{ArtifactKind, Primitive, RenderArtifact};

/// Backend-agnostic draw list for one chart pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub viewport: Viewport,
    pub artifacts: Vec<RenderArtifact>,
}

impl RenderPlan {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: ArtifactKind, primitive: Primitive) {
        self.artifacts.push(RenderArtifact::new(kind, primitive));
    }

    /// Drops every artifact tagged `kind`.
    pub fn clear_kind(&mut self, kind: ArtifactKind) {
        self.artifacts.retain(|artifact| artifact.kind != kind);
    }

    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &Primitive> + '_ {
        self.artifacts
            .iter()
            .filter(move |artifact| artifact.kind == kind)
            .map(|artifact| &artifact.primitive)
    }

    #[must_use]
    pub fn count_of(&self, kind: ArtifactKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for artifact in &self.artifacts {
            artifact.primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
