use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{DataArea, DataItem, Insets, Rect, line_gap};

/// Height of a category label box.
pub const LABEL_HEIGHT: f64 = 16.0;

/// Category labels chosen for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlan {
    /// Shown item indices, ascending.
    pub indices: IndexSet<usize>,
    /// Width reserved for each shown label.
    pub label_width: f64,
    /// `true` when some labels were dropped for lack of space.
    pub crowded: bool,
}

impl LabelPlan {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            indices: IndexSet::new(),
            label_width: 0.0,
            crowded: false,
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Label text plus its box in viewport pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSlot {
    pub index: usize,
    pub text: String,
    pub rect: Rect,
}

/// How many labels of `min_label_width` fit into `available_width` (at least one).
#[must_use]
pub fn max_labels(available_width: f64, min_label_width: f64) -> usize {
    if min_label_width.is_nan() || min_label_width <= 0.0 || !available_width.is_finite() {
        return 1;
    }
    ((available_width / min_label_width).floor() as usize).max(1)
}

/// Decides which category labels are shown.
///
/// When every label fits, all are shown at the line-gap width. Otherwise every
/// `stride`-th label is kept at `min_label_width`, and the trailing label is
/// forced in or out according to `show_last_label`.
#[must_use]
pub fn plan_labels(
    item_count: usize,
    available_width: f64,
    min_label_width: f64,
    show_last_label: bool,
) -> LabelPlan {
    if item_count == 0 {
        return LabelPlan::empty();
    }

    let capacity = max_labels(available_width, min_label_width);
    if item_count <= capacity {
        return LabelPlan {
            indices: (0..item_count).collect(),
            label_width: line_gap(available_width, item_count).unwrap_or(min_label_width),
            crowded: false,
        };
    }

    let stride = item_count.div_ceil(capacity);
    let last = item_count - 1;
    let mut indices: IndexSet<usize> = (0..item_count).step_by(stride).collect();
    if show_last_label {
        indices.insert(last);
    } else {
        indices.shift_remove(&last);
    }

    LabelPlan {
        indices,
        label_width: min_label_width,
        crowded: true,
    }
}

/// Places shown labels centered under their points, inside the bottom inset.
#[must_use]
pub fn layout_labels(plan: &LabelPlan, items: &[DataItem], area: DataArea, insets: Insets) -> Vec<LabelSlot> {
    let gap = line_gap(area.width, items.len()).unwrap_or(0.0);
    let y = insets.top + area.height + insets.bottom / 2.0 - LABEL_HEIGHT / 2.0;

    plan.indices
        .iter()
        .filter_map(|&index| {
            let item = items.get(index)?;
            let center_x = insets.left + index as f64 * gap;
            Some(LabelSlot {
                index,
                text: item.label.clone(),
                rect: Rect::new(center_x - plan.label_width / 2.0, y, plan.label_width, LABEL_HEIGHT),
            })
        })
        .collect()
}
