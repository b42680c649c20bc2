//! Native bitmap resource and its reference semantics.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Resource-level caching behavior.
///
/// `Never` means the resource must always be read fresh from its owning
/// handle; the image bridge forces this at wrap time so a stale duplicate
/// cannot outlive the script-owned copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Default,
    Never,
}

/// One strong reference to a native bitmap.
///
/// `NativeImage` is not created by this crate's converters; the windowing
/// environment hands one in. What the boundary manages is the reference
/// itself: cloning mints a new independent strong reference (a retain) and
/// dropping releases it. Two clones of the same image refer to the same
/// underlying resource, which [`same_resource`](Self::same_resource)
/// detects by identity rather than by pixel content.
#[derive(Debug, Clone)]
pub struct NativeImage {
    data: Arc<ImageData>,
}

#[derive(Debug)]
struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    cache_never: AtomicBool,
}

impl NativeImage {
    /// Create a blank image of the given size, zero-filled RGBA.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self::from_rgba(width, height, vec![0; len])
    }

    /// Create an image over existing RGBA pixel data, row-major, 4 bytes
    /// per pixel.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            data: Arc::new(ImageData {
                width,
                height,
                pixels,
                cache_never: AtomicBool::new(false),
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.data.width
    }

    pub fn height(&self) -> u32 {
        self.data.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data.pixels
    }

    pub fn cache_mode(&self) -> CacheMode {
        if self.data.cache_never.load(Ordering::Relaxed) {
            CacheMode::Never
        } else {
            CacheMode::Default
        }
    }

    /// Set the caching behavior on the underlying resource.
    ///
    /// Takes `&self`: the mode is shared by every reference to the
    /// resource, not a property of one handle.
    pub fn set_cache_mode(&self, mode: CacheMode) {
        self.data
            .cache_never
            .store(mode == CacheMode::Never, Ordering::Relaxed);
    }

    /// True if both values reference the same underlying bitmap.
    pub fn same_resource(&self, other: &NativeImage) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Number of live strong references to the underlying bitmap.
    pub fn reference_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }
}
