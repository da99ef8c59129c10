use tracing::trace;

use crate::core::{AxisLine, Point, nearest_point};
use crate::interaction::{Highlight, PointerEvent, PointerPhase};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    pub fn on_pointer_down(&mut self, location: Point, inside_chart: bool) -> Option<&Highlight> {
        self.handle_pointer(PointerEvent::new(PointerPhase::Down, location, inside_chart))
    }

    pub fn on_pointer_move(&mut self, location: Point, inside_chart: bool) -> Option<&Highlight> {
        self.handle_pointer(PointerEvent::new(PointerPhase::Move, location, inside_chart))
    }

    pub fn on_pointer_up(&mut self, location: Point, inside_chart: bool) -> Option<&Highlight> {
        self.handle_pointer(PointerEvent::new(PointerPhase::Up, location, inside_chart))
    }

    /// Resolves one pointer event against the last computed points.
    ///
    /// Returns the highlight after the event. Events are ignored entirely when
    /// `highlight_on_touch` is off.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<&Highlight> {
        if !self.config.highlight_on_touch {
            return self.interaction.highlight();
        }

        match event.phase {
            PointerPhase::Down => self.interaction.on_pointer_down(event.location),
            PointerPhase::Move => self.interaction.on_pointer_move(event.location),
            PointerPhase::Up => self.interaction.on_pointer_up(event.location),
        }

        if !event.inside_chart {
            if self.config.remove_highlight_when_touch_leaves_chart {
                self.clear_highlight();
            }
            return self.interaction.highlight();
        }

        if event.phase == PointerPhase::Up && self.config.hide_highlight_on_touch_end {
            self.clear_highlight();
            return self.interaction.highlight();
        }

        if let Some(highlight) = self.resolve_highlight(event.location) {
            trace!(
                index = highlight.index,
                x = highlight.point.x,
                y = highlight.point.y,
                "pointer highlight"
            );
            self.interaction.set_highlight(highlight);
            self.refresh_highlight();
        }
        self.interaction.highlight()
    }

    /// Removes the highlight and its artifacts.
    pub fn clear_highlight(&mut self) {
        if self.interaction.clear_highlight() {
            trace!("highlight cleared");
            self.refresh_highlight();
        }
    }

    fn resolve_highlight(&self, location: Point) -> Option<Highlight> {
        let layout = self.layout.as_ref()?;
        let hit = nearest_point(location, &layout.points)?;
        let item = layout.items.get(hit.index)?.clone();
        let vertical_line = self.config.show_highlight_line.then_some(AxisLine {
            x: hit.point.x,
            top: 0.0,
            bottom: layout.data_area.height,
        });
        Some(Highlight {
            index: hit.index,
            point: hit.point,
            item,
            vertical_line,
        })
    }
}
