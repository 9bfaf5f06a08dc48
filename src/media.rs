//! Media element abstraction.
//!
//! A [`MediaElement`] is the thing that actually plays an episode. It is
//! commanded imperatively (play, pause, seek, loop) and reports back through
//! [`MediaEvent`]s, which the surface drains with
//! [`MediaElement::poll_events`]. A [`MediaBackend`] creates one element per
//! selected episode.

use std::collections::VecDeque;
use std::time::Instant;

use log::debug;

use crate::error::{AppError, Result};
use crate::types::Episode;

/// Notifications emitted by a media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and position are known.
    LoadedMetadata,
    /// The playback position changed.
    TimeUpdate,
    /// Playback started.
    Play,
    /// Playback paused, by request or because the track ended.
    Pause,
    /// The track reached its end without looping.
    Ended,
}

/// An element bound to a single episode.
pub trait MediaElement {
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;

    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds.
    fn duration(&self) -> f64;

    /// When set the element restarts the track itself and never emits
    /// [`MediaEvent::Ended`].
    fn set_loop(&mut self, looping: bool);

    /// Advance to `now` and drain pending events, oldest first.
    fn poll_events(&mut self, now: Instant) -> Vec<MediaEvent>;
}

/// Creates media elements for episodes.
pub trait MediaBackend {
    type Element: MediaElement;

    fn open(&mut self, episode: &Episode, autoplay: bool) -> Result<Self::Element>;
}

/// A media element driven by the wall clock.
///
/// The position advances by the time elapsed between polls while playing.
/// Events follow the order an HTML audio element uses.
#[derive(Debug)]
pub struct ClockElement {
    url: String,
    duration: f64,
    position: f64,
    paused: bool,
    looping: bool,
    last_tick: Option<Instant>,
    pending: VecDeque<MediaEvent>,
}

impl ClockElement {
    pub fn new(episode: &Episode, autoplay: bool) -> Self {
        let mut element = Self {
            url: episode.url.clone(),
            duration: episode.duration as f64,
            position: 0.0,
            paused: true,
            looping: false,
            last_tick: None,
            pending: VecDeque::new(),
        };
        element.pending.push_back(MediaEvent::LoadedMetadata);
        if autoplay {
            element.play();
        }
        element
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn advance(&mut self, elapsed: f64) {
        self.position += elapsed;

        if self.position < self.duration {
            self.pending.push_back(MediaEvent::TimeUpdate);
            return;
        }

        if self.looping {
            self.position = if self.duration > 0.0 {
                self.position % self.duration
            } else {
                0.0
            };
            self.pending.push_back(MediaEvent::TimeUpdate);
        } else {
            debug!("Reached end of {}", self.url);
            self.position = self.duration;
            self.paused = true;
            self.last_tick = None;
            self.pending.push_back(MediaEvent::TimeUpdate);
            self.pending.push_back(MediaEvent::Pause);
            self.pending.push_back(MediaEvent::Ended);
        }
    }
}

impl MediaElement for ClockElement {
    fn play(&mut self) {
        if self.position >= self.duration && self.duration > 0.0 {
            self.position = 0.0;
            self.pending.push_back(MediaEvent::TimeUpdate);
        }
        if self.paused {
            self.paused = false;
            self.last_tick = None;
            self.pending.push_back(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.last_tick = None;
            self.pending.push_back(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.duration);
        self.pending.push_back(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn poll_events(&mut self, now: Instant) -> Vec<MediaEvent> {
        if !self.paused {
            if let Some(last) = self.last_tick {
                let elapsed = now.saturating_duration_since(last).as_secs_f64();
                if elapsed > 0.0 {
                    self.advance(elapsed);
                }
            }
            if !self.paused {
                self.last_tick = Some(now);
            }
        }

        self.pending.drain(..).collect()
    }
}

/// Backend producing [`ClockElement`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockBackend;

impl MediaBackend for ClockBackend {
    type Element = ClockElement;

    fn open(&mut self, episode: &Episode, autoplay: bool) -> Result<ClockElement> {
        if episode.url.trim().is_empty() {
            return Err(AppError::Media(format!(
                "episode '{}' has no media url",
                episode.title
            )));
        }
        debug!("Opening clock element for {}", episode.url);
        Ok(ClockElement::new(episode, autoplay))
    }
}
