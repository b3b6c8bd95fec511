use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::error::ConfigError;

/// Candidate asset names probed in every category directory
pub const DEFAULT_CANDIDATE_NAMES: [&str; 12] = [
    "a", "b", "c", "d", "1", "2", "3", "4", "correct", "wrong", "success", "fail",
];

/// Sound extensions in priority order
pub const DEFAULT_SOUND_EXTENSIONS: [&str; 4] = [".mp3", ".wav", ".ogg", ".m4a"];

/// Image extensions in priority order
pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".svg"];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_candidate_names() -> Vec<String> {
    to_strings(&DEFAULT_CANDIDATE_NAMES)
}

fn default_sound_extensions() -> Vec<String> {
    to_strings(&DEFAULT_SOUND_EXTENSIONS)
}

fn default_image_extensions() -> Vec<String> {
    to_strings(&DEFAULT_IMAGE_EXTENSIONS)
}

/// Which kind of asset a manifest entry names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Sound,
    Effect,
}

/// One explicitly listed asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub kind: AssetKind,
    pub category: Category,
    pub name: String,
    /// Location handed to the fetcher, e.g. `/assets/sounds/correct/a.mp3`
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL prepended to asset locations by the HTTP fetcher
    pub base_url: String,

    /// Local directory to read assets from instead of HTTP
    pub asset_root: Option<PathBuf>,

    /// Sound root, category directories live below it
    pub sound_dir: String,

    /// Effect image root, category directories live below it
    pub effect_dir: String,

    /// Names probed in each category directory
    pub candidate_names: Vec<String>,

    /// Sound extensions, first match per name wins
    pub sound_extensions: Vec<String>,

    /// Image extensions, first match per name wins
    pub image_extensions: Vec<String>,

    pub correct_volume: f32,
    pub wrong_volume: f32,
    pub click_volume: f32,

    /// Sample rate of the synthesized fallback tone
    pub tone_sample_rate: u32,

    /// How long an overlay stays mounted
    pub overlay_lifetime_ms: u64,

    /// Overlay images are scaled down to fit this square
    pub max_image_size: u32,

    /// Per-request timeout for the HTTP fetcher
    pub fetch_timeout_ms: u64,

    /// Only match a played sound to an effect of the same category
    pub scoped_matching: bool,

    /// Explicit asset list; replaces probing when present
    pub manifest: Option<Vec<ManifestEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            asset_root: None,
            sound_dir: "/assets/sounds".to_string(),
            effect_dir: "/assets/effects".to_string(),
            candidate_names: default_candidate_names(),
            sound_extensions: default_sound_extensions(),
            image_extensions: default_image_extensions(),
            correct_volume: 0.6,
            wrong_volume: 0.6,
            click_volume: 0.3,
            tone_sample_rate: 44_100,
            overlay_lifetime_ms: 2000,
            max_image_size: 200,
            fetch_timeout_ms: 5000,
            scoped_matching: false,
            manifest: None,
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, writing defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!("Created default config at: {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;
        config.validate()?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ConfigError::SaveFailed {
                path: path.display().to_string(),
                source,
            }
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| save_failed(Box::new(e)))?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(Box::new(e)))?;
        fs::write(path, json).map_err(|e| save_failed(Box::new(e)))?;
        Ok(())
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("QuizFeedback").join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, volume) in [
            ("correct_volume", self.correct_volume),
            ("wrong_volume", self.wrong_volume),
            ("click_volume", self.click_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    field, volume
                )));
            }
        }

        if self.tone_sample_rate == 0 {
            return Err(ConfigError::Invalid("tone_sample_rate must be positive".into()));
        }
        if self.overlay_lifetime_ms == 0 {
            return Err(ConfigError::Invalid("overlay_lifetime_ms must be positive".into()));
        }
        if self.max_image_size == 0 {
            return Err(ConfigError::Invalid("max_image_size must be positive".into()));
        }
        if self.sound_extensions.is_empty() || self.image_extensions.is_empty() {
            return Err(ConfigError::Invalid("extension lists must not be empty".into()));
        }

        Ok(())
    }

    /// Directory probed for sounds of a category, with a trailing slash
    pub fn sound_base(&self, category: Category) -> String {
        format!("{}/{}/", self.sound_dir.trim_end_matches('/'), category)
    }

    /// Directory probed for effect images of a category, with a trailing slash
    pub fn effect_base(&self, category: Category) -> String {
        format!("{}/{}/", self.effect_dir.trim_end_matches('/'), category)
    }

    /// Manifest entries of one kind, if a manifest is configured
    pub fn manifest_entries(&self, kind: AssetKind) -> Option<Vec<ManifestEntry>> {
        self.manifest.as_ref().map(|entries| {
            entries
                .iter()
                .filter(|e| e.kind == kind)
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.correct_volume, 0.6);
        assert_eq!(config.wrong_volume, 0.6);
        assert_eq!(config.click_volume, 0.3);
        assert_eq!(config.overlay_lifetime_ms, 2000);
        assert_eq!(config.max_image_size, 200);
        assert_eq!(config.candidate_names.len(), 12);
        assert_eq!(config.sound_extensions[0], ".mp3");
        assert_eq!(config.image_extensions[4], ".svg");
        assert!(!config.scoped_matching);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_category_bases() {
        let config = Config::default();
        assert_eq!(config.sound_base(Category::Correct), "/assets/sounds/correct/");
        assert_eq!(config.effect_base(Category::Wrong), "/assets/effects/wrong/");

        let config = Config {
            sound_dir: "/media/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.sound_base(Category::Wrong), "/media/wrong/");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "click_volume": 0.1, "scoped_matching": true }"#).unwrap();
        assert_eq!(config.click_volume, 0.1);
        assert!(config.scoped_matching);
        assert_eq!(config.correct_volume, 0.6);
        assert_eq!(config.sound_dir, "/assets/sounds");
    }

    #[test]
    fn test_validate_rejects_out_of_range_volume() {
        let config = Config {
            wrong_volume: 1.5,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let config = Config {
            image_extensions: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_manifest_filtering() {
        let json = r#"{
            "manifest": [
                { "kind": "sound", "category": "correct", "name": "a", "path": "/s/a.wav" },
                { "kind": "effect", "category": "wrong", "name": "b", "path": "/e/b.png" }
            ]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let sounds = config.manifest_entries(AssetKind::Sound).unwrap();
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].name, "a");
        assert_eq!(sounds[0].category, Category::Correct);

        assert!(Config::default().manifest_entries(AssetKind::Effect).is_none());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = std::env::temp_dir().join(format!("quiz-feedback-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let _ = fs::remove_file(&path);

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.correct_volume, 0.6);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.overlay_lifetime_ms, created.overlay_lifetime_ms);

        let _ = fs::remove_dir_all(&dir);
    }
}
