use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShowcaseError};
use crate::venue::{derive_view, VenueRecord, VenueView};

/// Showcase shipped inside the binary, used when the user has none
const BUNDLED_SHOWCASE: &str = include_str!("../../data/venues.toml");

fn default_title() -> String {
    "Tiki Hit".to_string()
}

fn default_tagline() -> String {
    "Only the best make the list".to_string()
}

fn default_fallback_image() -> String {
    "/images/placeholder.webp".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Line under the heading
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Photo used for venues that list no images
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    #[serde(default)]
    pub venues: Vec<VenueRecord>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            fallback_image: default_fallback_image(),
            venues: Vec::new(),
        }
    }
}

impl ShowcaseConfig {
    /// Get the default showcase file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ShowcaseError::NoConfigDir)?
            .join("tikihit");
        Ok(config_dir.join("venues.toml"))
    }

    /// The showcase compiled into the binary
    pub fn bundled() -> Self {
        match Self::from_toml(BUNDLED_SHOWCASE, Path::new("<bundled>")) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Bundled showcase is invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Load the showcase.
    ///
    /// An explicit path must load. Without one, the per-user file is tried
    /// and any problem with it falls back to the bundled showcase.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::config_path() {
            Ok(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("{}, using bundled showcase", e),
            },
            Ok(_) => {}
            Err(e) => tracing::warn!("{}", e),
        }

        Ok(Self::bundled())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ShowcaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let mut config: ShowcaseConfig =
            toml::from_str(content).map_err(|source| ShowcaseError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.venues.retain(|v| {
            let keep = !v.name.trim().is_empty();
            if !keep {
                tracing::warn!("Skipping unnamed venue at rank {} in {}", v.rank, path.display());
            }
            keep
        });

        tracing::debug!("Loaded {} venues from {}", config.venues.len(), path.display());
        Ok(config)
    }

    /// Write the bundled showcase to the default path for editing
    pub fn write_default() -> Result<PathBuf> {
        let path = Self::config_path()?;
        Self::write_default_to(&path)?;
        Ok(path)
    }

    /// Write the bundled showcase to `path`, refusing to replace a file
    pub fn write_default_to(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ShowcaseError::AlreadyExists(path.to_path_buf()));
        }

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ShowcaseError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, BUNDLED_SHOWCASE).map_err(|source| ShowcaseError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Wrote showcase to {}", path.display());
        Ok(())
    }

    /// Cards in display order. Equal ranks keep file order.
    pub fn ranked_views(&self) -> Vec<VenueView> {
        let mut venues: Vec<&VenueRecord> = self.venues.iter().collect();
        venues.sort_by_key(|v| v.rank);
        venues
            .into_iter()
            .map(|v| derive_view(v, &self.fallback_image))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_showcase_parses() {
        let config = ShowcaseConfig::from_toml(BUNDLED_SHOWCASE, Path::new("<bundled>")).unwrap();

        assert_eq!(config.title, "Tiki Hit");
        assert!(config.venues.len() >= 3);

        let views = config.ranked_views();
        assert_eq!(views.len(), config.venues.len());
        for view in &views {
            assert!(!view.resolved_images.is_empty());
            assert_ne!(view.formatted_last_visit, crate::venue::view::DATE_PLACEHOLDER);
        }
    }

    #[test]
    fn test_defaults_and_ordering() {
        let config = ShowcaseConfig::from_toml(
            r#"
            [[venues]]
            rank = 2
            name = "Second A"

            [[venues]]
            rank = 1
            name = "First"
            images = []

            [[venues]]
            rank = 2
            name = "Second B"
            "#,
            Path::new("test.toml"),
        )
        .unwrap();

        assert_eq!(config.tagline, "Only the best make the list");

        let views = config.ranked_views();
        let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["First", "Second A", "Second B"]);
        assert_eq!(views[0].resolved_images, vec!["/images/placeholder.webp".to_string()]);
    }

    #[test]
    fn test_unnamed_venues_skipped() {
        let config = ShowcaseConfig::from_toml(
            r#"
            fallback_image = "/x.webp"

            [[venues]]
            rank = 1
            name = "  "

            [[venues]]
            rank = 2
            name = "Hala Kahiki"
            "#,
            Path::new("test.toml"),
        )
        .unwrap();

        assert_eq!(config.venues.len(), 1);
        assert_eq!(config.venues[0].name, "Hala Kahiki");
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = ShowcaseConfig::from_toml("venues = 3", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ShowcaseError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let missing = std::env::temp_dir().join("tikihit-does-not-exist/venues.toml");
        let err = ShowcaseConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ShowcaseError::Read { .. }));
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let dir = std::env::temp_dir().join(format!("tikihit-init-{}", std::process::id()));
        let path = dir.join("tikihit/venues.toml");
        let _ = std::fs::remove_dir_all(&dir);

        ShowcaseConfig::write_default_to(&path).unwrap();
        let written = ShowcaseConfig::load_from(&path).unwrap();
        assert_eq!(written.venues, ShowcaseConfig::bundled().venues);

        let err = ShowcaseConfig::write_default_to(&path).unwrap_err();
        assert!(matches!(err, ShowcaseError::AlreadyExists(ref p) if p == &path));

        // A file where the directory should be
        let blocked = dir.join("tikihit/venues.toml/nested.toml");
        let err = ShowcaseConfig::write_default_to(&blocked).unwrap_err();
        assert!(matches!(err, ShowcaseError::Write { .. }));
        assert!(err.to_string().starts_with("Failed to write"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_serialization() {
        let config = ShowcaseConfig::bundled();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: ShowcaseConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.venues, deserialized.venues);
        assert_eq!(config.fallback_image, deserialized.fallback_image);
    }
}
