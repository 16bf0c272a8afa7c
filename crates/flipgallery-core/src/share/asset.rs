//! Asset retrieval and packaging for native shares.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use image::ImageFormat;

use crate::card::AssetRef;
use crate::error::{GalleryError, GalleryResult};

/// Content type used when the extension is not a known image format
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Somewhere image bytes can be retrieved from
pub trait AssetSource {
    fn fetch(&self, asset: &AssetRef) -> impl Future<Output = GalleryResult<Bytes>> + Send;
}

/// Reads assets from files relative to a root directory
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, asset: &AssetRef) -> PathBuf {
        self.root.join(asset.uri().trim_start_matches('/'))
    }
}

impl AssetSource for FsAssetSource {
    fn fetch(&self, asset: &AssetRef) -> impl Future<Output = GalleryResult<Bytes>> + Send {
        let path = self.path_for(asset);
        let uri = asset.uri().to_string();
        async move {
            tokio::fs::read(&path)
                .await
                .map(Bytes::from)
                .map_err(|e| GalleryError::AssetFetch {
                    uri,
                    reason: e.to_string(),
                })
        }
    }
}

/// A named, typed file ready to hand to a share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    pub name: String,
    pub content_type: &'static str,
    pub data: Bytes,
}

impl SharedFile {
    pub fn package(asset: &AssetRef, data: Bytes) -> Self {
        Self {
            name: asset.file_name().to_string(),
            content_type: content_type_for(asset.file_name()),
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Infer a MIME type from a file name's extension
pub fn content_type_for(file_name: &str) -> &'static str {
    ImageFormat::from_path(file_name)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// Fetch every asset concurrently and package them in the given order.
///
/// Fails on the first fetch error, or if the whole batch exceeds `timeout`.
pub async fn fetch_files<A: AssetSource>(
    source: &A,
    assets: &[AssetRef],
    timeout: Duration,
) -> GalleryResult<Vec<SharedFile>> {
    let fetches = assets.iter().map(|asset| async move {
        let data = source.fetch(asset).await?;
        Ok::<_, GalleryError>(SharedFile::package(asset, data))
    });

    match tokio::time::timeout(timeout, futures::future::try_join_all(fetches)).await {
        Ok(files) => files,
        Err(_) => Err(GalleryError::Timeout(timeout)),
    }
}
