//! Playback state container.
//!
//! [`Player`] owns the episode queue and the playback flags. Everything else
//! reads a [`PlaybackState`] snapshot and changes it only through the intents
//! defined here. Intents are total: invalid navigation is a no-op.

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::Episode;

/// The player's owned state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Episodes in playback order.
    pub episode_queue: Vec<Episode>,
    /// Index of the selected episode; 0 when the queue is empty.
    pub active_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

impl PlaybackState {
    pub fn has_previous(&self) -> bool {
        self.active_index > 0
    }

    /// Shuffle mode always has somewhere to go.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.active_index + 1 < self.episode_queue.len()
    }

    /// The selected episode, if the queue is non-empty.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_queue.get(self.active_index)
    }

    pub fn is_empty(&self) -> bool {
        self.episode_queue.is_empty()
    }
}

/// Playback state container.
pub struct Player {
    state: PlaybackState,
    rng: SmallRng,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create an empty, paused player with an OS-seeded shuffle RNG.
    pub fn new() -> Self {
        Self {
            state: PlaybackState::default(),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Create an empty player whose shuffle sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: PlaybackState::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.state.current_episode()
    }

    /// Replace the queue with a single episode and start playing it.
    pub fn play_single(&mut self, episode: Episode) {
        debug!("Playing single episode '{}'", episode.title);
        self.state.episode_queue = vec![episode];
        self.state.active_index = 0;
        self.state.is_playing = true;
    }

    /// Replace the queue with `list` and start playing at `index`.
    ///
    /// An index outside the list leaves the state untouched.
    pub fn play_from_list(&mut self, list: Vec<Episode>, index: usize) {
        if index >= list.len() {
            warn!(
                "Ignoring play request for index {} of a {}-episode list",
                index,
                list.len()
            );
            return;
        }

        debug!("Playing list of {} episodes from index {}", list.len(), index);
        self.state.episode_queue = list;
        self.state.active_index = index;
        self.state.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        debug!("Playing toggled to {}", self.state.is_playing);
    }

    /// Set the playing flag directly.
    ///
    /// Used to mirror the element's own play/pause notifications, so repeated
    /// calls with the same value must stay no-ops.
    pub fn set_playing_state(&mut self, playing: bool) {
        if self.state.is_playing != playing {
            debug!("Playing state reconciled to {}", playing);
            self.state.is_playing = playing;
        }
    }

    pub fn play_previous(&mut self) {
        if self.state.has_previous() {
            self.state.active_index -= 1;
            debug!("Moved to previous episode {}", self.state.active_index);
        }
    }

    /// Advance to the next episode, or to a random one while shuffling.
    ///
    /// Shuffle may pick the current index again.
    pub fn play_next(&mut self) {
        if self.state.is_shuffling {
            let len = self.state.episode_queue.len();
            if len == 0 {
                return;
            }
            self.state.active_index = self.rng.random_range(0..len);
            debug!("Shuffled to episode {}", self.state.active_index);
        } else if self.state.has_next() {
            self.state.active_index += 1;
            debug!("Moved to next episode {}", self.state.active_index);
        }
    }

    pub fn toggle_loop(&mut self) {
        self.state.is_looping = !self.state.is_looping;
        debug!("Looping toggled to {}", self.state.is_looping);
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.is_shuffling = !self.state.is_shuffling;
        debug!("Shuffling toggled to {}", self.state.is_shuffling);
    }

    /// Empty the queue. The playing flag is kept as it is.
    pub fn clear_player(&mut self) {
        debug!("Clearing player queue");
        self.state.episode_queue.clear();
        self.state.active_index = 0;
    }
}
