use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as struct fields (props) and render to a
/// `Frame` within a given `Rect`. The `render` method takes `&mut self` so a
/// component may keep presentation caches between frames.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
