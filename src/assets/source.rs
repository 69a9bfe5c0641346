use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Boxed future returned by [`ImageFetch::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = ShotframeResult<Vec<u8>>> + Send + 'a>>;

/// A deferred image handle whose bytes arrive asynchronously (upload, drag-drop, URL, ...).
pub trait ImageFetch: fmt::Debug + Send + Sync {
    /// Produce the encoded image bytes.
    fn fetch(&self) -> FetchFuture<'_>;
}

/// Where a slide's photo comes from.
///
/// The compositor treats every variant the same way: load the encoded bytes, decode them, and
/// degrade to "no image" if either step fails.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Encoded bytes already in memory.
    Bytes(Arc<[u8]>),
    /// A file on disk, read when the slide renders.
    File(PathBuf),
    /// A caller-provided asynchronous handle.
    Fetch(Arc<dyn ImageFetch>),
}

impl ImageSource {
    /// Wrap encoded bytes.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Reference a file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Load and decode the image. This is the only suspension point of a slide render.
    ///
    /// `File` sources are read with blocking `std::fs::read` on the polling thread; only
    /// `Fetch` sources actually yield. Callers on a shared executor should prefer `Bytes` or a
    /// `Fetch` handle backed by their own async I/O.
    pub(crate) async fn load(&self) -> ShotframeResult<PreparedImage> {
        match self {
            Self::Bytes(bytes) => decode_image(bytes),
            Self::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    ShotframeError::image_decode(format!(
                        "failed to read image '{}': {e}",
                        path.display()
                    ))
                })?;
                decode_image(&bytes)
            }
            Self::Fetch(handle) => {
                let bytes = handle.fetch().await?;
                decode_image(&bytes)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
