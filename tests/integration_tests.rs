//! Integration tests for podcast-player.
//!
//! These tests drive the player and surface together through the public API,
//! using the clock backend with explicit instants instead of sleeping.

use podcast_player::catalog::{load_catalog, parse_catalog};
use podcast_player::config::Config;
use podcast_player::media::{ClockBackend, MediaElement};
use podcast_player::player::Player;
use podcast_player::surface::{Control, Surface};
use podcast_player::types::{format_duration, Episode};
use std::time::{Duration, Instant};

fn episode(n: usize, duration: u64) -> Episode {
    Episode {
        title: format!("Episode {}", n),
        members: "Ana, Bruno".to_string(),
        thumbnail: format!("https://example.com/{}.jpg", n),
        duration,
        url: format!("https://example.com/{}.mp3", n),
    }
}

/// Test that a catalog file feeds straight into the player.
#[test]
fn test_catalog_into_player() {
    let json = r#"[
        {"title": "A", "members": "Ana", "thumbnail": "a.jpg", "duration": 30, "url": "a.mp3"},
        {"title": "B", "members": "Bia", "thumbnail": "b.jpg", "duration": 45, "url": "b.mp3"},
        {"title": "C", "members": "Caio", "thumbnail": "c.jpg", "duration": 60, "url": "c.mp3"}
    ]"#;
    let catalog = parse_catalog(json).unwrap();

    let mut player = Player::with_seed(7);
    player.play_from_list(catalog, 1);

    assert_eq!(player.current_episode().map(|e| e.title.as_str()), Some("B"));
    assert!(player.has_previous());
    assert!(player.has_next());
}

/// Test that the bundled example catalog loads.
#[test]
fn test_example_catalog_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("catalog.example.json");
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.iter().all(|e| e.duration > 0 && !e.url.is_empty()));
}

/// Test previous navigation from the middle of a queue.
#[test]
fn test_previous_then_noop_at_start() {
    let mut player = Player::with_seed(1);
    player.play_from_list(vec![episode(0, 10), episode(1, 10), episode(2, 10)], 1);

    player.play_previous();
    assert_eq!(player.state().active_index, 0);

    player.play_previous();
    assert_eq!(player.state().active_index, 0);
}

/// Test shuffle enabling next on the last episode.
#[test]
fn test_shuffle_enables_next_on_last_episode() {
    let mut player = Player::with_seed(1);
    player.play_from_list(vec![episode(0, 10), episode(1, 10)], 1);
    assert!(!player.has_next());

    player.toggle_shuffle();
    assert!(player.has_next());
    assert_eq!(player.state().active_index, 1);
}

/// Test that a whole queue plays through and then clears.
#[test]
fn test_queue_plays_through_then_clears() {
    let mut player = Player::with_seed(1);
    let mut surface = Surface::new(ClockBackend);
    player.play_from_list(vec![episode(0, 5), episode(1, 5)], 0);
    surface.sync(player.state());

    let start = Instant::now();
    let mut now = start;
    for _ in 0..40 {
        surface.pump(&mut player, now);
        now += Duration::from_millis(500);
    }

    assert!(player.state().is_empty());
    assert_eq!(player.state().active_index, 0);
    assert!(surface.element().is_none());
}

/// Test that a looping track keeps playing past its end.
#[test]
fn test_looping_track_is_not_advanced() {
    let mut player = Player::with_seed(1);
    let mut surface = Surface::new(ClockBackend);
    player.play_from_list(vec![episode(0, 5), episode(1, 5)], 0);
    assert!(surface.press(&mut player, Control::Repeat));

    let start = Instant::now();
    let mut now = start;
    for _ in 0..40 {
        surface.pump(&mut player, now);
        now += Duration::from_millis(500);
    }

    assert_eq!(player.state().active_index, 0);
    assert!(player.state().is_playing);
    let element = surface.element().unwrap();
    assert!(element.current_time() < 5.0);
}

/// Test pausing through the control row stops the clock.
#[test]
fn test_pause_stops_progress() {
    let mut player = Player::with_seed(1);
    let mut surface = Surface::new(ClockBackend);
    player.play_single(episode(0, 100));
    surface.sync(player.state());

    let start = Instant::now();
    surface.pump(&mut player, start);
    surface.pump(&mut player, start + Duration::from_secs(3));
    assert_eq!(surface.progress(), 3);

    assert!(surface.press(&mut player, Control::TogglePlay));
    assert!(!player.state().is_playing);
    surface.pump(&mut player, start + Duration::from_secs(10));
    assert_eq!(surface.progress(), 3);
    assert!(!player.state().is_playing);
}

/// Test seeking shows the new position immediately.
#[test]
fn test_seek_then_continue() {
    let mut player = Player::with_seed(1);
    let mut surface = Surface::new(ClockBackend);
    player.play_single(episode(0, 100));
    surface.sync(player.state());

    let start = Instant::now();
    surface.pump(&mut player, start);
    surface.seek(40).unwrap();
    assert_eq!(surface.progress(), 40);

    surface.pump(&mut player, start + Duration::from_secs(2));
    assert_eq!(surface.progress(), 42);
}

/// Test that clearing keeps the playing flag set.
#[test]
fn test_clear_keeps_playing_flag() {
    let mut player = Player::with_seed(1);
    player.play_single(episode(0, 10));
    player.clear_player();

    assert!(player.state().is_empty());
    assert!(player.state().is_playing);
}

/// Test config defaults.
#[test]
fn test_config_defaults() {
    let config = Config::new();
    assert_eq!(config.tick_ms, 250);
    assert_eq!(config.seek_step, 10);
}

/// Test duration labels used by the progress bar.
#[test]
fn test_duration_labels() {
    assert_eq!(format_duration(0), "00:00:00");
    assert_eq!(format_duration(61), "00:01:01");
    assert_eq!(format_duration(7322), "02:02:02");
}
