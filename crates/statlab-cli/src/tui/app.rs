use crossterm::event::Event;
use ratatui::Frame;

/// Trait for TUI applications.
///
/// Applications executed by `Tui::run()` must implement this trait.
/// There is no periodic update: state only changes in response to events.
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen (called on each `TuiEvent::Render`).
    fn draw(&self, frame: &mut Frame);
}
