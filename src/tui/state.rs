//! Application state management and input handling.

use crate::config::Keybindings;
use crate::surface::Control;
use crate::types::Episode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use super::types::Action;

/// Application state for the TUI.
///
/// Playback state lives in the player; this only holds what the terminal
/// needs on top of it.
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Episodes available to play
    pub catalog: Vec<Episode>,
    /// List state for the catalog
    pub catalog_list_state: ListState,
    /// Whether help modal is shown
    pub show_help: bool,
    /// Status message shown in the header
    pub status_message: Option<String>,
    /// Current error message
    pub error_message: Option<String>,
    /// Custom keybindings
    pub keybindings: Keybindings,
}

impl App {
    /// Create a new App over a catalog.
    pub fn new(catalog: Vec<Episode>, keybindings: Keybindings) -> Self {
        let mut catalog_list_state = ListState::default();
        if !catalog.is_empty() {
            catalog_list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            catalog,
            catalog_list_state,
            show_help: false,
            status_message: None,
            error_message: None,
            keybindings,
        }
    }

    /// Set an error message.
    pub fn set_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }

    /// Clear error message.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set status message.
    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    /// Index of the highlighted catalog entry.
    pub fn selected(&self) -> Option<usize> {
        self.catalog_list_state
            .selected()
            .filter(|i| *i < self.catalog.len())
    }

    /// Handle keyboard input and return an action.
    pub fn handle_input(&mut self, key: KeyEvent) -> Action {
        // Global quit with Ctrl+C or Ctrl+Q
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Action::Quit;
                }
                _ => {}
            }
        }

        let kb = &self.keybindings;

        if self.show_help {
            if key.code == KeyCode::Esc || kb.matches(&kb.help, &key) || kb.matches(&kb.quit, &key)
            {
                self.show_help = false;
            }
            return Action::None;
        }

        if kb.matches(&kb.help, &key) {
            self.show_help = true;
            Action::None
        } else if kb.matches(&kb.quit, &key) {
            self.should_quit = true;
            Action::Quit
        } else if kb.matches(&kb.up, &key) {
            let i = self.catalog_list_state.selected().unwrap_or(0);
            if i > 0 {
                self.catalog_list_state.select(Some(i - 1));
            }
            Action::None
        } else if kb.matches(&kb.down, &key) {
            let i = self.catalog_list_state.selected().unwrap_or(0);
            if i < self.catalog.len().saturating_sub(1) {
                self.catalog_list_state.select(Some(i + 1));
            }
            Action::None
        } else if kb.matches(&kb.play, &key) {
            self.selected().map_or(Action::None, Action::PlaySingle)
        } else if kb.matches(&kb.play_all, &key) {
            self.selected().map_or(Action::None, Action::PlayFromList)
        } else if kb.matches(&kb.toggle_play, &key) {
            Action::Press(Control::TogglePlay)
        } else if kb.matches(&kb.next, &key) {
            Action::Press(Control::Next)
        } else if kb.matches(&kb.previous, &key) {
            Action::Press(Control::Previous)
        } else if kb.matches(&kb.shuffle, &key) {
            Action::Press(Control::Shuffle)
        } else if kb.matches(&kb.repeat, &key) {
            Action::Press(Control::Repeat)
        } else if kb.matches(&kb.seek_forward, &key) {
            Action::SeekForward
        } else if kb.matches(&kb.seek_backward, &key) {
            Action::SeekBackward
        } else {
            Action::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(n: usize) -> Episode {
        Episode {
            title: format!("Episode {}", n),
            members: "Host".to_string(),
            thumbnail: "thumb.jpg".to_string(),
            duration: 60,
            url: format!("{}.mp3", n),
        }
    }

    fn app(count: usize) -> App {
        App::new((0..count).map(episode).collect(), Keybindings::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut app = app(3);
        app.handle_input(press(KeyCode::Up));
        assert_eq!(app.selected(), Some(0));

        for _ in 0..5 {
            app.handle_input(press(KeyCode::Down));
        }
        assert_eq!(app.selected(), Some(2));
    }

    #[test]
    fn test_enter_plays_selected_episode() {
        let mut app = app(3);
        app.handle_input(press(KeyCode::Char('j')));
        assert_eq!(app.handle_input(press(KeyCode::Enter)), Action::PlaySingle(1));
        assert_eq!(
            app.handle_input(press(KeyCode::Char('a'))),
            Action::PlayFromList(1)
        );
    }

    #[test]
    fn test_empty_catalog_plays_nothing() {
        let mut app = app(0);
        assert_eq!(app.handle_input(press(KeyCode::Enter)), Action::None);
    }

    #[test]
    fn test_control_keys() {
        let mut app = app(1);
        assert_eq!(
            app.handle_input(press(KeyCode::Char(' '))),
            Action::Press(Control::TogglePlay)
        );
        assert_eq!(
            app.handle_input(press(KeyCode::Char('s'))),
            Action::Press(Control::Shuffle)
        );
        assert_eq!(
            app.handle_input(press(KeyCode::Char('r'))),
            Action::Press(Control::Repeat)
        );
        assert_eq!(app.handle_input(press(KeyCode::Right)), Action::SeekForward);
        assert_eq!(app.handle_input(press(KeyCode::Left)), Action::SeekBackward);
    }

    #[test]
    fn test_help_modal_swallows_input() {
        let mut app = app(2);
        app.handle_input(press(KeyCode::Char('?')));
        assert!(app.show_help);

        assert_eq!(app.handle_input(press(KeyCode::Char('n'))), Action::None);
        app.handle_input(press(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app(1);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_input(key), Action::Quit);
        assert!(app.should_quit);
    }
}
