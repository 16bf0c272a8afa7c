//! Share coordinator integration tests
//!
//! Drives the native → cancel → link fallback chain with recording doubles.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use flipgallery_core::{
    AssetRef, AssetSource, Card, CardId, GalleryError, GalleryResult, LinkOpener, LinkTarget,
    NativeShare, NativeShareMode, NoNativeShare, ShareAssetPolicy, ShareChannel, ShareConfig,
    ShareCoordinator, ShareError, ShareOutcome, SharePayload, SharedFile,
};
use parking_lot::Mutex;
use url::Url;

// ============================================================================
// Test doubles
// ============================================================================

/// In-memory assets; anything not inserted fails to fetch
#[derive(Clone, Default)]
struct MemoryAssets {
    files: HashMap<String, Bytes>,
    hang: bool,
}

impl MemoryAssets {
    fn for_card(card: &Card) -> Self {
        let mut files = HashMap::new();
        files.insert(card.front.uri().to_string(), Bytes::from_static(b"front"));
        files.insert(card.back.uri().to_string(), Bytes::from_static(b"back"));
        Self { files, hang: false }
    }
}

impl AssetSource for MemoryAssets {
    fn fetch(&self, asset: &AssetRef) -> impl Future<Output = GalleryResult<Bytes>> + Send {
        let found = self.files.get(asset.uri()).cloned();
        let uri = asset.uri().to_string();
        let hang = self.hang;
        async move {
            if hang {
                futures::future::pending::<()>().await;
            }
            found.ok_or(GalleryError::AssetFetch {
                uri,
                reason: "not found".to_string(),
            })
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prompt {
    Accept,
    Dismiss,
    Fail,
    Hang,
}

/// Native share that records payloads and accepts at most `max_files`
#[derive(Clone)]
struct RecordingShare {
    max_files: usize,
    prompt: Prompt,
    payloads: Arc<Mutex<Vec<SharePayload>>>,
}

impl RecordingShare {
    fn new(max_files: usize, prompt: Prompt) -> Self {
        Self {
            max_files,
            prompt,
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn payloads(&self) -> Vec<SharePayload> {
        self.payloads.lock().clone()
    }
}

impl NativeShare for RecordingShare {
    fn is_available(&self) -> bool {
        true
    }

    fn can_share(&self, files: &[SharedFile]) -> bool {
        !files.is_empty() && files.len() <= self.max_files
    }

    fn share(&self, payload: SharePayload) -> impl Future<Output = Result<(), ShareError>> + Send {
        self.payloads.lock().push(payload);
        let prompt = self.prompt;
        async move {
            match prompt {
                Prompt::Accept => Ok(()),
                Prompt::Dismiss => Err(ShareError::Aborted),
                Prompt::Fail => Err(ShareError::Failed("share target crashed".to_string())),
                Prompt::Hang => {
                    futures::future::pending::<()>().await;
                    Ok(())
                }
            }
        }
    }
}

#[derive(Clone, Default)]
struct RecordingLinks {
    opened: Arc<Mutex<Vec<(Url, LinkTarget)>>>,
}

impl RecordingLinks {
    fn opened(&self) -> Vec<(Url, LinkTarget)> {
        self.opened.lock().clone()
    }
}

impl LinkOpener for RecordingLinks {
    fn open(&self, url: &Url, target: LinkTarget) -> Result<(), ShareError> {
        self.opened.lock().push((url.clone(), target));
        Ok(())
    }
}

/// Link opener whose launcher always fails, recording what it was asked to open
#[derive(Clone, Default)]
struct FailingLinks {
    attempts: Arc<Mutex<Vec<Url>>>,
}

impl LinkOpener for FailingLinks {
    fn open(&self, url: &Url, _target: LinkTarget) -> Result<(), ShareError> {
        self.attempts.lock().push(url.clone());
        Err(ShareError::Failed("no handler for link".to_string()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn card() -> Card {
    Card::new(CardId(3), "Center", 1, "images/{n}.jpg")
}

fn config(policy: ShareAssetPolicy) -> ShareConfig {
    ShareConfig {
        policy,
        native: NativeShareMode::Enabled,
        page_url: "https://photos.example.org/gallery/#card-1".to_string(),
        ..ShareConfig::default()
    }
}

fn body_of(url: &Url) -> String {
    url.query_pairs()
        .find(|(k, _)| k == "body")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

// ============================================================================
// Native path
// ============================================================================

#[tokio::test]
async fn test_multi_file_native_share_skips_fallback() {
    let card = card();
    let native = RecordingShare::new(2, Prompt::Accept);
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        native.clone(),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert_eq!(outcome, ShareOutcome::Native { files: 2 });
    let payloads = native.payloads();
    assert_eq!(payloads.len(), 1);
    let names: Vec<&str> = payloads[0].files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["5.jpg", "6.jpg"]);
    assert_eq!(payloads[0].files[0].data.as_ref(), b"front");
    assert_eq!(payloads[0].files[1].data.as_ref(), b"back");
    assert_eq!(payloads[0].title, "Card 3");
    assert!(links.opened().is_empty());
}

#[tokio::test]
async fn test_front_only_policy_shares_one_file() {
    let card = card();
    let native = RecordingShare::new(2, Prompt::Accept);
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontOnly),
        MemoryAssets::for_card(&card),
        native.clone(),
        RecordingLinks::default(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Email).await;

    assert_eq!(outcome, ShareOutcome::Native { files: 1 });
    assert_eq!(native.payloads()[0].files.len(), 1);
    assert_eq!(native.payloads()[0].files[0].name, "5.jpg");
}

#[tokio::test]
async fn test_falls_back_to_front_file_when_pair_unsupported() {
    let card = card();
    let native = RecordingShare::new(1, Prompt::Accept);
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        native.clone(),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert_eq!(outcome, ShareOutcome::Native { files: 1 });
    assert_eq!(native.payloads()[0].files[0].name, "5.jpg");
    assert!(links.opened().is_empty());
}

#[tokio::test]
async fn test_dismissed_prompt_does_not_fall_back() {
    let card = card();
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        RecordingShare::new(2, Prompt::Dismiss),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert_eq!(outcome, ShareOutcome::Cancelled);
    assert!(links.opened().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_prompt_timeout_ends_quietly() {
    let card = card();
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        RecordingShare::new(2, Prompt::Hang),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert_eq!(outcome, ShareOutcome::Cancelled);
    assert!(links.opened().is_empty());
}

// ============================================================================
// Fallback path
// ============================================================================

#[tokio::test]
async fn test_failed_prompt_falls_back_to_link() {
    let card = card();
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        RecordingShare::new(2, Prompt::Fail),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert!(matches!(outcome, ShareOutcome::Link(_)));
    assert_eq!(links.opened().len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_falls_back_without_prompt() {
    let card = card();
    let native = RecordingShare::new(2, Prompt::Accept);
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::default(),
        native.clone(),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Email).await;

    assert!(matches!(outcome, ShareOutcome::Link(_)));
    assert!(native.payloads().is_empty());
    assert_eq!(links.opened()[0].1, LinkTarget::SameContext);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_timeout_falls_back() {
    let card = card();
    let mut assets = MemoryAssets::for_card(&card);
    assets.hang = true;
    let native = RecordingShare::new(2, Prompt::Accept);
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        assets,
        native.clone(),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert!(matches!(outcome, ShareOutcome::Link(_)));
    assert!(native.payloads().is_empty());
}

#[tokio::test]
async fn test_unsupported_files_fall_back() {
    let card = card();
    let native = RecordingShare::new(0, Prompt::Accept);
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        native.clone(),
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Chat).await;

    assert!(matches!(outcome, ShareOutcome::Link(_)));
    assert!(native.payloads().is_empty());
}

#[tokio::test]
async fn test_disabled_native_mode_goes_straight_to_link() {
    let card = card();
    let native = RecordingShare::new(2, Prompt::Accept);
    let links = RecordingLinks::default();
    let mut share_config = config(ShareAssetPolicy::FrontAndBack);
    share_config.native = NativeShareMode::Disabled;
    let coordinator = ShareCoordinator::new(
        share_config,
        MemoryAssets::for_card(&card),
        native.clone(),
        links.clone(),
    )
    .unwrap();

    coordinator.share(&card, ShareChannel::Chat).await;

    assert!(native.payloads().is_empty());
    assert_eq!(links.opened().len(), 1);
}

#[tokio::test]
async fn test_email_link_without_native_share() {
    let card = card();
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        NoNativeShare,
        links.clone(),
    )
    .unwrap();

    let outcome = coordinator.share(&card, ShareChannel::Email).await;

    let opened = links.opened();
    assert_eq!(opened.len(), 1);
    let (url, target) = &opened[0];
    assert_eq!(outcome, ShareOutcome::Link(url.clone()));
    assert_eq!(*target, LinkTarget::SameContext);
    assert_eq!(url.scheme(), "mailto");

    let body = body_of(url);
    assert!(body.contains("Center 1"));
    assert!(!body.contains("Front"));
    assert!(body.ends_with("#card-3"));
    assert!(body.contains("https://photos.example.org/gallery/#card-3"));
    assert!(!body.contains("#card-1"));
}

#[tokio::test]
async fn test_chat_link_opens_new_context() {
    let card = card();
    let links = RecordingLinks::default();
    let coordinator = ShareCoordinator::new(
        config(ShareAssetPolicy::FrontAndBack),
        MemoryAssets::for_card(&card),
        NoNativeShare,
        links.clone(),
    )
    .unwrap();

    coordinator.share(&card, ShareChannel::Chat).await;

    let (url, target) = links.opened().remove(0);
    assert_eq!(target, LinkTarget::NewContext);
    assert_eq!(url.host_str(), Some("wa.me"));
    let text = url
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert!(text.starts_with("Have a look at this card:"));
    assert!(text.ends_with("#card-3"));
}

#[tokio::test]
async fn test_link_open_failure_is_reported() {
    let card = card();
    let native = RecordingShare::new(2, Prompt::Accept);
    let links = FailingLinks::default();
    let mut share_config = config(ShareAssetPolicy::FrontAndBack);
    share_config.native = NativeShareMode::Disabled;
    let coordinator = ShareCoordinator::new(
        share_config,
        MemoryAssets::for_card(&card),
        native.clone(),
        links.clone(),
    )
    .unwrap();

    for channel in [ShareChannel::Email, ShareChannel::Chat] {
        let outcome = coordinator.share(&card, channel).await;
        assert_eq!(outcome, ShareOutcome::Failed("Share failed: no handler for link".to_string()));
    }

    let attempts = links.attempts.lock().clone();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].scheme(), "mailto");
    assert_eq!(attempts[1].host_str(), Some("wa.me"));
    assert!(native.payloads().is_empty());
}

#[tokio::test]
async fn test_chat_link_keeps_configured_query() {
    let card = card();
    let links = RecordingLinks::default();
    let share_config = ShareConfig {
        chat_base_url: "https://api.whatsapp.com/send?phone=15551234".to_string(),
        ..config(ShareAssetPolicy::FrontAndBack)
    };
    let coordinator = ShareCoordinator::new(
        share_config,
        MemoryAssets::for_card(&card),
        NoNativeShare,
        links.clone(),
    )
    .unwrap();

    coordinator.share(&card, ShareChannel::Chat).await;

    let (url, _) = links.opened().remove(0);
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["phone".to_string(), "text".to_string()]);
    assert!(url.as_str().starts_with("https://api.whatsapp.com/send?phone=15551234&text="));
}

#[test]
fn test_bad_page_url_rejected() {
    let share_config = ShareConfig {
        page_url: "::nope".to_string(),
        ..ShareConfig::default()
    };
    let result = ShareCoordinator::new(
        share_config,
        MemoryAssets::default(),
        NoNativeShare,
        RecordingLinks::default(),
    );
    assert!(matches!(result, Err(GalleryError::InvalidUrl(_))));
}

#[test]
fn test_fetch_timeout_default_is_bounded() {
    assert_eq!(ShareConfig::default().fetch_timeout(), Duration::from_secs(10));
}
