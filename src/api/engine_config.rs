use serde::{Deserialize, Serialize};

use crate::core::Insets;

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Missing fields fall back to the
/// defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Draw the series as a smoothed cubic curve instead of a polyline.
    #[serde(default)]
    pub curved: bool,
    /// Paint the dashed horizontal grid lines (the bottom line is always painted).
    #[serde(default = "default_true")]
    pub grid_lines_visible: bool,
    /// Keep the trailing category label even when labels are decimated.
    #[serde(default = "default_true")]
    pub show_last_label: bool,
    #[serde(default = "default_min_label_width")]
    pub min_label_width: f64,
    #[serde(default)]
    pub insets: Insets,
    #[serde(default = "default_true")]
    pub show_dots: bool,
    #[serde(default = "default_dot_outer_radius")]
    pub dot_outer_radius: f64,
    #[serde(default = "default_dot_inner_radius")]
    pub dot_inner_radius: f64,
    /// Emit the closed mask path used to clip a gradient fill.
    #[serde(default = "default_true")]
    pub gradient: bool,
    #[serde(default = "default_true")]
    pub highlight_on_touch: bool,
    /// Attach a vertical line to the highlight.
    #[serde(default = "default_true")]
    pub show_highlight_line: bool,
    #[serde(default)]
    pub hide_highlight_on_touch_end: bool,
    #[serde(default = "default_true")]
    pub remove_highlight_when_touch_leaves_chart: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            curved: false,
            grid_lines_visible: true,
            show_last_label: true,
            min_label_width: default_min_label_width(),
            insets: Insets::default(),
            show_dots: true,
            dot_outer_radius: default_dot_outer_radius(),
            dot_inner_radius: default_dot_inner_radius(),
            gradient: true,
            highlight_on_touch: true,
            show_highlight_line: true,
            hide_highlight_on_touch_end: false,
            remove_highlight_when_touch_leaves_chart: true,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_curved(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    #[must_use]
    pub fn with_grid_lines_visible(mut self, visible: bool) -> Self {
        self.grid_lines_visible = visible;
        self
    }

    #[must_use]
    pub fn with_show_last_label(mut self, show: bool) -> Self {
        self.show_last_label = show;
        self
    }

    #[must_use]
    pub fn with_min_label_width(mut self, width: f64) -> Self {
        self.min_label_width = width;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets dot marker sizes; `inner` must not exceed `outer`.
    #[must_use]
    pub fn with_dots(mut self, show: bool, outer: f64, inner: f64) -> Self {
        self.show_dots = show;
        self.dot_outer_radius = outer;
        self.dot_inner_radius = inner;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub fn with_highlight_on_touch(mut self, enabled: bool) -> Self {
        self.highlight_on_touch = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight_line(mut self, show: bool) -> Self {
        self.show_highlight_line = show;
        self
    }

    #[must_use]
    pub fn with_hide_highlight_on_touch_end(mut self, hide: bool) -> Self {
        self.hide_highlight_on_touch_end = hide;
        self
    }

    #[must_use]
    pub fn with_remove_highlight_when_touch_leaves_chart(mut self, remove: bool) -> Self {
        self.remove_highlight_when_touch_leaves_chart = remove;
        self
    }

    /// Insets actually used for layout.
    ///
    /// When the trailing label is shown the right inset grows to half a label
    /// width so the label is not clipped by the viewport edge.
    #[must_use]
    pub fn effective_insets(&self) -> Insets {
        if self.show_last_label {
            let right = self.insets.right.max(self.min_label_width / 2.0);
            self.insets.with_right(right)
        } else {
            self.insets
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_label_width() -> f64 {
    40.0
}

fn default_dot_outer_radius() -> f64 {
    10.0
}

fn default_dot_inner_radius() -> f64 {
    8.0
}
