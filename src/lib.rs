//! A terminal podcast player written in Rust.
//!
//! podcast-player keeps a queue of episodes in a single [`player::Player`],
//! binds a media element to it through a [`surface::Surface`], and renders the
//! result with ratatui.
//!
//! # Features
//!
//! - Play a single episode or queue a whole catalog
//! - Previous / next navigation, shuffle and repeat
//! - Seeking with an optimistic progress display
//! - Keybindings and tick rate from a TOML config file
//!
//! # Usage
//!
//! ```bash
//! # Play from a JSON catalog
//! cargo run -- episodes.json
//!
//! # Log debug output to a file
//! cargo run -- episodes.json -l 3 --log-file player.log
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod media;
pub mod player;
pub mod surface;
pub mod tui;
pub mod types;
