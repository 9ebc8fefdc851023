use std::io;

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Rendering is driven by state changes: every terminal event marks the screen
/// dirty, and a `Render` event is yielded before blocking on the next input.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop`.
    pub(super) fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    ///
    /// Blocks until a crossterm event occurs when nothing needs rendering.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_render() {
        let mut events = EventLoop::new();
        assert!(events.next().unwrap().is_render());
        assert!(!events.dirty);
    }
}
