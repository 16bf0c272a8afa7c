//! Desktop implementations of the share collaborators.

use std::future::Future;

use flipgallery_core::share::native::save_payload;
use flipgallery_core::{LinkOpener, LinkTarget, NativeShare, ShareError, SharePayload, SharedFile};
use rfd::FileDialog;
use url::Url;

/// Native share for desktop: the user picks a folder and the images are saved there.
///
/// Closing the picker is the cancel outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderShare;

impl NativeShare for FolderShare {
    fn is_available(&self) -> bool {
        true
    }

    fn can_share(&self, files: &[SharedFile]) -> bool {
        !files.is_empty() && files.iter().all(SharedFile::is_image)
    }

    fn share(&self, payload: SharePayload) -> impl Future<Output = Result<(), ShareError>> + Send {
        async move {
            let title = format!("Save {} to...", payload.title);

            // Blocking dialog, run off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new().set_title(&title).pick_folder()
            })
            .await
            .map_err(|e| ShareError::Failed(format!("folder picker error: {}", e)))?;

            let Some(dir) = picked else {
                return Err(ShareError::Aborted);
            };

            let written = save_payload(&dir, &payload).await?;
            tracing::info!(dir = %dir.display(), files = written.len(), "Saved shared images");
            Ok(())
        }
    }
}

/// Launches a URL with the system handler
pub type Launcher = fn(&str) -> std::io::Result<()>;

/// Hands share links to the operating system (default browser, mail client).
///
/// The webview itself never navigates, so `mailto:` and chat links cannot
/// be swallowed by its navigation handler.
#[derive(Debug, Clone, Copy)]
pub struct SystemLinks {
    launcher: Launcher,
}

impl SystemLinks {
    pub fn with_launcher(launcher: Launcher) -> Self {
        Self { launcher }
    }
}

impl Default for SystemLinks {
    fn default() -> Self {
        Self::with_launcher(|url| open::that_detached(url))
    }
}

impl LinkOpener for SystemLinks {
    fn open(&self, url: &Url, target: LinkTarget) -> Result<(), ShareError> {
        // Either target leaves the gallery window in place; the system handler owns the new context
        tracing::debug!(scheme = url.scheme(), ?target, "Opening share link with system handler");
        (self.launcher)(url.as_str()).map_err(|e| {
            ShareError::Failed(format!("no handler for {} link: {}", url.scheme(), e))
        })
    }
}
