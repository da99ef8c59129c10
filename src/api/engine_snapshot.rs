use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataItem, Domain, Point, Viewport};
use crate::interaction::Highlight;

use super::ChartConfig;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub config: ChartConfig,
    pub items: Vec<DataItem>,
    pub domain: Option<Domain>,
    pub points: Vec<Point>,
    pub shown_label_indices: Vec<usize>,
    pub highlight: Option<Highlight>,
    /// Artifact counts keyed by kind, in draw order.
    pub artifact_counts: IndexMap<String, usize>,
}
