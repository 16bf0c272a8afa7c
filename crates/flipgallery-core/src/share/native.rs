//! Platform share prompt abstraction.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::error::ShareError;
use crate::share::asset::SharedFile;

/// What gets handed to the platform share prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub files: Vec<SharedFile>,
}

/// A runtime capable of sharing files natively.
///
/// `share` resolves to `Err(ShareError::Aborted)` when the user dismisses
/// the prompt.
pub trait NativeShare {
    fn is_available(&self) -> bool;

    fn can_share(&self, files: &[SharedFile]) -> bool;

    fn share(&self, payload: SharePayload) -> impl Future<Output = Result<(), ShareError>> + Send;
}

/// Runtime without any native sharing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeShare;

impl NativeShare for NoNativeShare {
    fn is_available(&self) -> bool {
        false
    }

    fn can_share(&self, _files: &[SharedFile]) -> bool {
        false
    }

    fn share(&self, _payload: SharePayload) -> impl Future<Output = Result<(), ShareError>> + Send {
        async { Err(ShareError::Unsupported) }
    }
}

/// Write every payload file into `dir`, returning the written paths.
///
/// Used by share targets that deliver files by saving them somewhere the
/// user picked.
pub async fn save_payload(dir: &Path, payload: &SharePayload) -> Result<Vec<PathBuf>, ShareError> {
    let mut written = Vec::with_capacity(payload.files.len());
    for file in &payload.files {
        let path = dir.join(&file.name);
        tokio::fs::write(&path, &file.data)
            .await
            .map_err(|e| ShareError::Failed(format!("writing {}: {}", path.display(), e)))?;
        written.push(path);
    }
    Ok(written)
}
