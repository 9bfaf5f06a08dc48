//! TUI type definitions for actions.

use crate::surface::Control;

/// Actions that can be returned from the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action, continue running
    None,
    /// Quit the application
    Quit,
    /// Play the catalog episode at this index on its own
    PlaySingle(usize),
    /// Queue the whole catalog and start at this index
    PlayFromList(usize),
    /// Press a button on the control row
    Press(Control),
    /// Jump forward by the configured seek step
    SeekForward,
    /// Jump back by the configured seek step
    SeekBackward,
}
