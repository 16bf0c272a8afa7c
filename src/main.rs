#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod platform;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use flipgallery_core::{
    FsAssetSource, GalleryConfig, NativeShareMode, ShareAssetPolicy, ShareCoordinator,
};

use crate::context::{AppSettings, DesktopCoordinator};
use crate::platform::{FolderShare, SystemLinks};

/// Global settings, set once from the command line before launch
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Share coordinator wired to the desktop platform
static COORDINATOR: OnceLock<Arc<DesktopCoordinator>> = OnceLock::new();

/// Get the app settings (from the command line, or defaults)
pub fn get_settings() -> &'static AppSettings {
    SETTINGS.get_or_init(AppSettings::default)
}

/// Get the share coordinator, if startup built one
pub fn get_coordinator() -> Option<Arc<DesktopCoordinator>> {
    COORDINATOR.get().cloned()
}

/// Flip Gallery - password-gated flip cards
#[derive(Parser, Debug)]
#[command(name = "flipgallery-desktop")]
#[command(about = "Flip Gallery - a password-gated gallery of flip cards")]
struct Args {
    /// Config file (defaults to <config dir>/flipgallery/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the card images are read from
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,

    /// Override the gallery password
    #[arg(long)]
    secret: Option<String>,

    /// Images attached to native shares: front-only or front-and-back
    #[arg(long)]
    policy: Option<ShareAssetPolicy>,

    /// Offer a folder picker that saves the card images before falling back to links
    #[arg(long)]
    native_share: bool,

    /// Deep link to open after unlocking, e.g. "#card-4"
    #[arg(long)]
    card: Option<String>,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flipgallery")
        .join("config.toml")
}

fn main() -> anyhow::Result<()> {
    flipgallery_core::logging::init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = GalleryConfig::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    if let Some(secret) = args.secret {
        config.secret = secret;
    }
    if let Some(policy) = args.policy {
        config.share.policy = policy;
    }
    if args.native_share {
        config.share.native = NativeShareMode::Enabled;
    }
    config.validate().context("invalid gallery config")?;

    let coordinator = ShareCoordinator::new(
        config.share.clone(),
        FsAssetSource::new(&args.assets),
        FolderShare,
        SystemLinks::default(),
    )
    .context("building share coordinator")?;
    let _ = COORDINATOR.set(Arc::new(coordinator));

    tracing::info!(
        assets = %args.assets.display(),
        columns = config.roster.len(),
        cards_per_column = config.cards_per_column,
        policy = ?config.share.policy,
        native = ?config.share.native,
        "Starting Flip Gallery"
    );

    let _ = SETTINGS.set(AppSettings {
        config,
        asset_dir: args.assets,
        deep_link: args.card,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Flip Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
