//! Type definitions for podcast-player.
//!
//! Episodes come from an external catalog and are never mutated once they
//! reach the player.

use serde::{Deserialize, Serialize};

/// A single playable podcast episode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Episode {
    /// Episode title.
    pub title: String,

    /// Display credits (hosts and guests).
    pub members: String,

    /// Cover image URI.
    pub thumbnail: String,

    /// Length in whole seconds.
    pub duration: u64,

    /// Media URI handed to the media element.
    pub url: String,
}

impl Episode {
    /// Format the episode for display in the catalog list.
    ///
    /// # Examples
    ///
    /// ```
    /// use podcast_player::types::Episode;
    ///
    /// let ep = Episode {
    ///     title: "Pilot".to_string(),
    ///     members: "Ana, Bruno".to_string(),
    ///     thumbnail: "https://example.com/pilot.jpg".to_string(),
    ///     duration: 3725,
    ///     url: "https://example.com/pilot.mp3".to_string(),
    /// };
    /// assert_eq!(ep.to_display(), "Pilot (01:02:05)");
    /// ```
    pub fn to_display(&self) -> String {
        format!("{} ({})", self.title, format_duration(self.duration))
    }
}

/// Render whole seconds as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use podcast_player::types::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(59), "00:00:59");
/// assert_eq!(format_duration(3725), "01:02:05");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(title: &str, duration: u64) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Host".to_string(),
            thumbnail: "thumb.jpg".to_string(),
            duration,
            url: format!("https://example.com/{}.mp3", title),
        }
    }

    #[test]
    fn test_episode_to_display() {
        assert_eq!(episode("Intro", 90).to_display(), "Intro (00:01:30)");
    }

    #[test]
    fn test_episode_to_display_empty_title() {
        assert_eq!(episode("", 0).to_display(), " (00:00:00)");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(600), "00:10:00");
    }

    #[test]
    fn test_format_duration_over_a_day() {
        // Hours are not wrapped.
        assert_eq!(format_duration(100 * 3600 + 1), "100:00:01");
    }

    #[test]
    fn test_episode_deserialization() {
        let json = r#"{
            "title": "Ep 1",
            "members": "Ana",
            "thumbnail": "https://example.com/1.jpg",
            "duration": 1800,
            "url": "https://example.com/1.mp3"
        }"#;

        let ep: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(ep.title, "Ep 1");
        assert_eq!(ep.duration, 1800);
        assert_eq!(ep.url, "https://example.com/1.mp3");
    }
}
