//! Episode catalog loading.
//!
//! The catalog is a JSON array of episodes produced by whatever feeds the
//! player (a feed exporter, a static file, ...).

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{AppError, Result};
use crate::types::Episode;

/// Parse a catalog from JSON text.
pub fn parse_catalog(content: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<Episode> = serde_json::from_str(content)?;
    if episodes.is_empty() {
        return Err(AppError::Catalog("catalog contains no episodes".to_string()));
    }
    Ok(episodes)
}

/// Load a catalog from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<Episode>> {
    let content = fs::read_to_string(path)?;
    let episodes = parse_catalog(&content)?;
    info!("Loaded {} episodes from {}", episodes.len(), path.display());
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = r#"[
            {"title": "One", "members": "Ana", "thumbnail": "1.jpg", "duration": 60, "url": "1.mp3"},
            {"title": "Two", "members": "Bia", "thumbnail": "2.jpg", "duration": 90, "url": "2.mp3"}
        ]"#;

        let episodes = parse_catalog(json).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].title, "Two");
        assert_eq!(episodes[1].duration, 90);
    }

    #[test]
    fn test_parse_empty_catalog_fails() {
        assert!(matches!(parse_catalog("[]"), Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_parse_missing_field_fails() {
        let json = r#"[{"title": "One", "members": "Ana"}]"#;
        assert!(matches!(parse_catalog(json), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_catalog(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
