//! Gallery configuration.
//!
//! Everything has a default so the app runs without a config file. A TOML
//! file only needs the keys it wants to change:
//!
//! ```toml
//! secret = "open-sesame"
//! roster = ["Spring", "Summer"]
//! cards_per_column = 3
//!
//! [share]
//! policy = "front-only"
//! page_url = "https://photos.example.org/gallery/"
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GalleryError, GalleryResult};

/// Placeholder replaced by the image number in [`GalleryConfig::asset_pattern`]
pub const ASSET_NUMBER_PLACEHOLDER: &str = "{n}";

/// Upper bound on `roster.len() * cards_per_column`; every card's back image
/// number (`2 * index`) must still fit in a `u32`
pub const MAX_CARDS: u64 = (u32::MAX / 2) as u64;

/// Which of a card's images are attached to a native share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShareAssetPolicy {
    FrontOnly,
    #[default]
    FrontAndBack,
}

impl FromStr for ShareAssetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front-only" => Ok(ShareAssetPolicy::FrontOnly),
            "front-and-back" => Ok(ShareAssetPolicy::FrontAndBack),
            other => Err(format!(
                "unknown share policy '{}' (expected front-only or front-and-back)",
                other
            )),
        }
    }
}

/// Whether the platform share prompt is offered before the link fallback.
///
/// Off unless asked for: on desktop the "native" prompt is a folder picker
/// that saves copies, which sends nothing to the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NativeShareMode {
    /// Always go straight to the text-link fallback
    #[default]
    Disabled,
    /// Offer the platform prompt (folder picker on desktop)
    Enabled,
}

/// Share coordinator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub policy: ShareAssetPolicy,
    pub native: NativeShareMode,
    /// Public address of the gallery; deep links are built from it
    pub page_url: String,
    /// Chat service base; the message is appended as a `text=` query parameter
    pub chat_base_url: String,
    pub mail_subject: String,
    /// First line of every fallback message
    pub preamble: String,
    /// Descriptive text attached to native shares
    pub text: String,
    pub fetch_timeout_secs: u64,
    pub prompt_timeout_secs: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            policy: ShareAssetPolicy::default(),
            native: NativeShareMode::default(),
            page_url: "http://localhost/gallery/".to_string(),
            chat_base_url: "https://wa.me/".to_string(),
            mail_subject: "A card from the gallery".to_string(),
            preamble: "Have a look at this card:".to_string(),
            text: "Front and back of a card from the gallery.".to_string(),
            fetch_timeout_secs: 10,
            prompt_timeout_secs: 300,
        }
    }
}

impl ShareConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn prompt_timeout(&self) -> Duration {
        Duration::from_secs(self.prompt_timeout_secs)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Plaintext password compared against the overlay input
    pub secret: String,
    /// Column names in display order
    pub roster: Vec<String>,
    pub cards_per_column: u32,
    /// Asset URI pattern, `{n}` is replaced by the image number
    pub asset_pattern: String,
    pub share: ShareConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            secret: "123".to_string(),
            roster: vec!["Left".to_string(), "Center".to_string(), "Right".to_string()],
            cards_per_column: 4,
            asset_pattern: "images/{n}.jpg".to_string(),
            share: ShareConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(source: &str) -> GalleryResult<Self> {
        let config: GalleryConfig =
            toml::from_str(source).map_err(|e| GalleryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> GalleryResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                tracing::info!(path = %path.display(), "Loaded gallery config");
                Self::from_toml(&source)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn validate(&self) -> GalleryResult<()> {
        if self.roster.is_empty() {
            return Err(GalleryError::Config("roster must name at least one column".into()));
        }
        if self.cards_per_column == 0 {
            return Err(GalleryError::Config("cards_per_column must be positive".into()));
        }
        let total = self.roster.len() as u64 * u64::from(self.cards_per_column);
        if total > MAX_CARDS {
            return Err(GalleryError::Config(format!(
                "{} cards requested, at most {} supported",
                total, MAX_CARDS
            )));
        }
        if !self.asset_pattern.contains(ASSET_NUMBER_PLACEHOLDER) {
            return Err(GalleryError::Config(format!(
                "asset_pattern must contain {}",
                ASSET_NUMBER_PLACEHOLDER
            )));
        }
        Url::parse(&self.share.page_url)?;
        Url::parse(&self.share.chat_base_url)?;
        Ok(())
    }
}
