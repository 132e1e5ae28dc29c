//! `fusion.toml` handling
//!
//! The file is optional; every section and key falls back to a default.
//!
//! ```toml
//! [site]
//! title = "Quantum Fusion"
//! content = "content/site.toml"
//!
//! [viewport]
//! width = 1280.0
//! height = 800.0
//!
//! [animation]
//! target_fps = 60
//! reveal_threshold = 0.1
//! reveal_margin = 0.0
//!
//! [newsletter]
//! delay_ms = 1000
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use fusion_content::SiteContent;
use fusion_layout::ObserveOptions;
use fusion_page::PageConfig;

pub const CONFIG_FILE: &str = "fusion.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FusionConfig {
    pub site: SiteConfig,
    pub viewport: ViewportConfig,
    pub animation: AnimationConfig,
    pub newsletter: NewsletterConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title override
    pub title: Option<String>,
    /// Content file replacing the embedded content, relative to the config
    pub content: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub target_fps: u32,
    pub reveal_threshold: f32,
    /// Viewport margin in px; positive reveals early
    pub reveal_margin: f32,
    /// Turn off intersection testing so everything reveals immediately
    pub observe_visibility: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            reveal_threshold: 0.1,
            reveal_margin: 0.0,
            observe_visibility: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub delay_ms: u32,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            delay_ms: fusion_page::newsletter::DEFAULT_DELAY_MS,
        }
    }
}

impl FusionConfig {
    /// Load `fusion.toml` from a directory, or defaults if there is none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, path.display());
            return Ok(Self::default());
        }

        let source = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        toml::from_str(&source)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Page mount settings
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
            reveal: ObserveOptions::new(
                self.animation.reveal_threshold,
                self.animation.reveal_margin,
            ),
            observe_visibility: self.animation.observe_visibility,
            newsletter_delay_ms: self.newsletter.delay_ms,
            target_fps: self.animation.target_fps,
            title: self.site.title.clone(),
        }
    }

    /// Site content: the configured file, or the embedded default
    pub fn load_content(&self, dir: &Path) -> Result<SiteContent> {
        match &self.site.content {
            Some(file) => {
                let path = dir.join(file);
                SiteContent::load_file(&path)
                    .with_context(|| format!("Failed to load content from {}", path.display()))
            }
            None => SiteContent::embedded().context("Embedded content is invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = FusionConfig::load_from_dir(dir.path()).expect("defaults");
        assert_eq!(config.viewport.width, 1280.0);
        assert_eq!(config.animation.target_fps, 60);
        assert_eq!(config.newsletter.delay_ms, 1000);
        assert!(config.site.content.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[viewport]\nwidth = 390.0\n\n[newsletter]\ndelay_ms = 250\n",
        )
        .expect("write config");

        let config = FusionConfig::load_from_dir(dir.path()).expect("config");
        assert_eq!(config.viewport.width, 390.0);
        assert_eq!(config.viewport.height, 800.0);
        assert_eq!(config.newsletter.delay_ms, 250);
        assert_eq!(config.animation.reveal_threshold, 0.1);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "[viewport\n").expect("write config");
        assert!(FusionConfig::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_page_config_mapping() {
        let mut config = FusionConfig::default();
        config.animation.reveal_threshold = 3.0;
        config.site.title = Some("QF".into());

        let page = config.page_config();
        assert_eq!(page.reveal.threshold, 1.0);
        assert_eq!(page.title.as_deref(), Some("QF"));
        assert_eq!(page.newsletter_delay_ms, 1000);
    }

    #[test]
    fn test_content_override_is_relative_to_config_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = fusion_content::EMBEDDED_CONTENT
            .replace("Quantum Fusion\"\nshort_name", "QF Labs\"\nshort_name");
        fs::write(dir.path().join("site.toml"), source).expect("write content");

        let config = FusionConfig {
            site: SiteConfig {
                title: None,
                content: Some(PathBuf::from("site.toml")),
            },
            ..FusionConfig::default()
        };
        let content = config.load_content(dir.path()).expect("content");
        assert_eq!(content.brand.name, "QF Labs");
    }
}
