//! Terminal User Interface for podcast-player using ratatui.
//!
//! This module provides a full-screen TUI with a catalog panel, a now-playing
//! panel, a progress bar and the control row.

mod render;
mod state;
mod types;

pub use render::draw;
pub use state::App;
pub use types::Action;

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Poll for keyboard events with a timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
