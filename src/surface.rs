//! Playback surface.
//!
//! The surface binds one [`MediaElement`] to the [`Player`]. It translates
//! control presses and seeks into player intents, relays element events back
//! into the player, and reconciles the element with the player state after
//! every change (see [`Surface::sync`]).

use std::time::Instant;

use log::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::media::{MediaBackend, MediaElement, MediaEvent};
use crate::player::{PlaybackState, Player};

/// Buttons on the control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Shuffle,
    Previous,
    TogglePlay,
    Next,
    Repeat,
}

/// Which controls accept presses for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub shuffle: bool,
    pub previous: bool,
    pub play: bool,
    pub next: bool,
    pub repeat: bool,
}

impl Controls {
    /// Everything is disabled on an empty queue. Shuffle also needs at least
    /// two episodes.
    pub fn for_state(state: &PlaybackState) -> Self {
        let has_episode = !state.is_empty();
        Self {
            shuffle: has_episode && state.episode_queue.len() != 1,
            previous: has_episode && state.has_previous(),
            play: has_episode,
            next: has_episode && state.has_next(),
            repeat: has_episode,
        }
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Shuffle => self.shuffle,
            Control::Previous => self.previous,
            Control::TogglePlay => self.play,
            Control::Next => self.next,
            Control::Repeat => self.repeat,
        }
    }
}

/// Binds a media element, created through `B`, to a [`Player`].
pub struct Surface<B: MediaBackend> {
    backend: B,
    element: Option<B::Element>,
    /// Url of the episode the element was opened for, kept even when the open
    /// failed so it is not retried on every sync.
    loaded_url: Option<String>,
    /// Bumped whenever the element is replaced or dropped.
    generation: u64,
    /// Last `is_playing` value pushed to the element.
    applied_playing: Option<bool>,
    /// Time updates are ignored until metadata has loaded.
    listening: bool,
    /// Displayed position in whole seconds.
    progress: u64,
}

impl<B: MediaBackend> Surface<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            element: None,
            loaded_url: None,
            generation: 0,
            applied_playing: None,
            listening: false,
            progress: 0,
        }
    }

    /// Displayed position in whole seconds.
    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn element(&self) -> Option<&B::Element> {
        self.element.as_ref()
    }

    /// Bring the element in line with `state`.
    ///
    /// Opens or drops the element when the selected episode changes, mirrors
    /// the loop flag, and plays or pauses the element once per change of
    /// `is_playing`.
    pub fn sync(&mut self, state: &PlaybackState) {
        match state.current_episode() {
            None => {
                if self.loaded_url.take().is_some() {
                    info!("Queue empty, releasing media element");
                    self.element = None;
                    self.generation += 1;
                }
                self.listening = false;
                self.progress = 0;
            }
            Some(episode) if self.loaded_url.as_deref() != Some(episode.url.as_str()) => {
                self.element = None;
                self.listening = false;
                self.progress = 0;
                self.generation += 1;
                self.loaded_url = Some(episode.url.clone());

                match self.backend.open(episode, true) {
                    Ok(element) => {
                        info!("Loaded '{}'", episode.title);
                        self.element = Some(element);
                    }
                    Err(e) => warn!("Could not open '{}': {}", episode.url, e),
                }
            }
            Some(_) => {}
        }

        let Some(element) = self.element.as_mut() else {
            self.applied_playing = Some(state.is_playing);
            return;
        };

        element.set_loop(state.is_looping);

        if self.applied_playing != Some(state.is_playing) {
            self.applied_playing = Some(state.is_playing);
            if state.is_playing {
                element.play();
            } else {
                element.pause();
            }
        }
    }

    /// React to a single element notification.
    pub fn handle_media_event(&mut self, player: &mut Player, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata => {
                if let Some(element) = self.element.as_mut() {
                    element.set_current_time(0.0);
                    self.listening = true;
                }
            }
            MediaEvent::TimeUpdate => {
                if !self.listening {
                    return;
                }
                if let Some(element) = self.element.as_ref() {
                    self.progress = element.current_time().floor() as u64;
                }
            }
            // The element is already in this state, so sync must not echo it back.
            MediaEvent::Play => {
                self.applied_playing = Some(true);
                player.set_playing_state(true);
            }
            MediaEvent::Pause => {
                self.applied_playing = Some(false);
                player.set_playing_state(false);
            }
            MediaEvent::Ended => {
                if player.has_next() {
                    player.play_next();
                } else {
                    player.clear_player();
                }
            }
        }
    }

    /// Drain the element's pending events and handle them in order.
    ///
    /// Events left in the batch after the element was replaced belong to the
    /// old episode and are dropped.
    pub fn pump(&mut self, player: &mut Player, now: Instant) {
        let events = match self.element.as_mut() {
            Some(element) => element.poll_events(now),
            None => return,
        };

        let generation = self.generation;
        for event in events {
            self.handle_media_event(player, event);
            self.sync(player.state());
            if self.generation != generation {
                debug!("Element replaced, dropping stale events");
                break;
            }
        }
    }

    /// Jump to `offset` seconds and show it right away.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        let element = self.element.as_mut().ok_or(AppError::NoActiveEpisode)?;
        let offset = offset.min(element.duration().floor() as u64);
        element.set_current_time(offset as f64);
        self.progress = offset;
        debug!("Seeked to {}s", offset);
        Ok(())
    }

    /// Seek relative to the displayed position, clamped to the episode.
    pub fn seek_by(&mut self, state: &PlaybackState, delta: i64) -> Result<()> {
        let episode = state.current_episode().ok_or(AppError::NoActiveEpisode)?;
        let target = (self.progress as i64 + delta).clamp(0, episode.duration as i64);
        self.seek(target as u64)
    }

    /// Apply a control press. Disabled controls are ignored and return false.
    pub fn press(&mut self, player: &mut Player, control: Control) -> bool {
        if !Controls::for_state(player.state()).is_enabled(control) {
            debug!("Ignoring press on disabled {:?}", control);
            return false;
        }

        match control {
            Control::Shuffle => player.toggle_shuffle(),
            Control::Previous => player.play_previous(),
            Control::TogglePlay => player.toggle_play(),
            Control::Next => player.play_next(),
            Control::Repeat => player.toggle_loop(),
        }
        self.sync(player.state());
        true
    }
}
