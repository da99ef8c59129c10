use serde::{Deserialize, Serialize};

use crate::core::{AxisLine, DataItem, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Pointer sample delivered by the host.
///
/// `location` is already converted into data-area-local pixels.
/// `inside_chart` reports whether the pointer is over the interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub location: Point,
    pub inside_chart: bool,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(phase: PointerPhase, location: Point, inside_chart: bool) -> Self {
        Self {
            phase,
            location,
            inside_chart,
        }
    }
}

/// Transient marker at the data point nearest to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub index: usize,
    /// Data-area-local position of the matched point.
    pub point: Point,
    pub item: DataItem,
    pub vertical_line: Option<AxisLine>,
}

/// Pointer session state plus the current highlight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pointer_active: bool,
    last_pointer: Option<Point>,
    highlight: Option<Highlight>,
}

impl InteractionState {
    #[must_use]
    pub fn pointer_active(&self) -> bool {
        self.pointer_active
    }

    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    pub fn on_pointer_down(&mut self, location: Point) {
        self.pointer_active = true;
        self.last_pointer = Some(location);
    }

    pub fn on_pointer_move(&mut self, location: Point) {
        self.last_pointer = Some(location);
    }

    pub fn on_pointer_up(&mut self, location: Point) {
        self.pointer_active = false;
        self.last_pointer = Some(location);
    }

    /// Replaces the highlight; the previous one is dropped, never reused.
    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = Some(highlight);
    }

    /// Removes the highlight and returns whether one was shown.
    pub fn clear_highlight(&mut self) -> bool {
        self.highlight.take().is_some()
    }
}
