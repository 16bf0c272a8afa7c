//! Shared app state for Flip Gallery.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut session = use_session();
//! session.write().dispatch(id, CardRegion::Body)?;
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use flipgallery_core::{FsAssetSource, GalleryConfig, Session, ShareCoordinator};

use crate::platform::{FolderShare, SystemLinks};

/// Share coordinator with the desktop collaborators plugged in
pub type DesktopCoordinator = ShareCoordinator<FsAssetSource, FolderShare, SystemLinks>;

/// Startup settings resolved from the command line and config file
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub config: GalleryConfig,
    pub asset_dir: PathBuf,
    /// `#card-<n>` fragment to open after unlocking
    pub deep_link: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            config: GalleryConfig::default(),
            asset_dir: PathBuf::from("."),
            deep_link: None,
        }
    }
}

/// Get the startup settings.
pub fn get_settings() -> &'static AppSettings {
    crate::get_settings()
}

/// Asset source used for rendering card faces
pub fn asset_source() -> FsAssetSource {
    FsAssetSource::new(get_settings().asset_dir.clone())
}

/// Hook to access the gate + gallery session from context.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
