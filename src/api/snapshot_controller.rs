use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{ArtifactKind, Renderer};

use super::{EngineSnapshot, LineChartEngine};

impl<R: Renderer> LineChartEngine<R> {
    /// Captures inputs and the geometry of the last recompute.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let mut artifact_counts = IndexMap::new();
        for kind in ArtifactKind::LAYOUT
            .into_iter()
            .chain(std::iter::once(ArtifactKind::Highlight))
        {
            artifact_counts.insert(format!("{kind:?}"), self.plan.count_of(kind));
        }

        EngineSnapshot {
            viewport: self.viewport,
            config: self.config,
            items: self.items.clone(),
            domain: self.domain(),
            points: self.points().to_vec(),
            shown_label_indices: self
                .layout
                .as_ref()
                .map(|layout| layout.label_plan.indices.iter().copied().collect())
                .unwrap_or_default(),
            highlight: self.interaction.highlight().cloned(),
            artifact_counts,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
