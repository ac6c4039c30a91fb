use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. Feature views are components built fresh
/// from a state snapshot on every frame.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// Handle a `TuiEvent`. Returns `true` if the event was consumed.
    fn handle_event(&mut self, event: &TuiEvent) -> bool;
}
