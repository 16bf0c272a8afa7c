//! Share coordinator.
//!
//! Resolves a share request for one card into exactly one terminal outcome:
//!
//! 1. native share of the policy set (all files, or just the front file),
//! 2. silent stop if the user dismissed the native prompt,
//! 3. otherwise the text-link fallback for the chosen channel.
//!
//! Each call is independent; nothing is retried or remembered.

pub mod asset;
pub mod link;
pub mod native;

use url::Url;

use crate::card::{AssetRef, Card, ShareChannel};
use crate::config::{NativeShareMode, ShareAssetPolicy, ShareConfig};
use crate::error::{GalleryResult, ShareError};

pub use asset::{fetch_files, AssetSource, FsAssetSource, SharedFile};
pub use link::{LinkOpener, LinkTarget};
pub use native::{NativeShare, NoNativeShare, SharePayload};

/// How a share request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native prompt accepted this many files
    Native { files: usize },
    /// The user dismissed the native prompt
    Cancelled,
    /// The fallback link was handed to the link opener
    Link(Url),
    /// The fallback link could not be opened
    Failed(String),
}

pub struct ShareCoordinator<A, N, L> {
    config: ShareConfig,
    page_url: Url,
    chat_base: Url,
    mail_base: Url,
    assets: A,
    native: N,
    links: L,
}

impl<A, N, L> ShareCoordinator<A, N, L>
where
    A: AssetSource,
    N: NativeShare,
    L: LinkOpener,
{
    pub fn new(config: ShareConfig, assets: A, native: N, links: L) -> GalleryResult<Self> {
        let page_url = Url::parse(&config.page_url)?;
        let chat_base = Url::parse(&config.chat_base_url)?;
        let mail_base = link::mail_base()?;
        Ok(Self {
            config,
            page_url,
            chat_base,
            mail_base,
            assets,
            native,
            links,
        })
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Images of `card` chosen by the configured policy, front first
    pub fn policy_set(&self, card: &Card) -> Vec<AssetRef> {
        match self.config.policy {
            ShareAssetPolicy::FrontOnly => vec![card.front.clone()],
            ShareAssetPolicy::FrontAndBack => vec![card.front.clone(), card.back.clone()],
        }
    }

    fn native_enabled(&self) -> bool {
        self.config.native == NativeShareMode::Enabled && self.native.is_available()
    }

    pub async fn share(&self, card: &Card, channel: ShareChannel) -> ShareOutcome {
        tracing::info!(card = %card.id, %channel, "Share requested");

        if self.native_enabled() {
            match self.try_native(card).await {
                Ok(Some(files)) => {
                    tracing::info!(card = %card.id, files, "Shared natively");
                    return ShareOutcome::Native { files };
                }
                Ok(None) => {
                    tracing::debug!(card = %card.id, "Native share rejected the files");
                }
                Err(e) if e.is_abort() => {
                    tracing::info!(card = %card.id, "Native share cancelled");
                    return ShareOutcome::Cancelled;
                }
                Err(e) => {
                    tracing::warn!(card = %card.id, "Native share failed, using link: {}", e);
                }
            }
        }

        self.share_link(card, channel)
    }

    /// `Ok(None)` when no file set was accepted by the runtime.
    async fn try_native(&self, card: &Card) -> Result<Option<usize>, ShareError> {
        let assets = self.policy_set(card);
        let files = fetch_files(&self.assets, &assets, self.config.fetch_timeout()).await?;

        if self.native.can_share(&files) {
            let count = files.len();
            self.prompt(card, files).await?;
            return Ok(Some(count));
        }

        if files.len() > 1 {
            let front = files[..1].to_vec();
            if self.native.can_share(&front) {
                self.prompt(card, front).await?;
                return Ok(Some(1));
            }
        }

        Ok(None)
    }

    /// Show the native prompt. A prompt left open past the timeout ends like a dismissal.
    async fn prompt(&self, card: &Card, files: Vec<SharedFile>) -> Result<(), ShareError> {
        let payload = SharePayload {
            title: format!("Card {}", card.id),
            text: self.config.text.clone(),
            files,
        };
        let timeout = self.config.prompt_timeout();
        match tokio::time::timeout(timeout, self.native.share(payload)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(card = %card.id, ?timeout, "Native share prompt timed out");
                Err(ShareError::Aborted)
            }
        }
    }

    /// Build the fallback message and hand the channel URL to the link opener.
    pub fn share_link(&self, card: &Card, channel: ShareChannel) -> ShareOutcome {
        let link = link::deep_link(&self.page_url, card.id);
        let message = link::fallback_message(&self.config.preamble, card, &link);

        let (url, target) = match channel {
            ShareChannel::Chat => (link::chat_url(&self.chat_base, &message), LinkTarget::NewContext),
            ShareChannel::Email => (
                link::mail_url(&self.mail_base, &self.config.mail_subject, &message),
                LinkTarget::SameContext,
            ),
        };

        match self.links.open(&url, target) {
            Ok(()) => {
                tracing::info!(card = %card.id, %channel, "Opened share link");
                ShareOutcome::Link(url)
            }
            Err(e) => {
                tracing::error!(card = %card.id, %channel, "Failed to open share link: {}", e);
                ShareOutcome::Failed(e.to_string())
            }
        }
    }
}
