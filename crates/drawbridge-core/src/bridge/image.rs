//! Native image to wrapped script handle, and back.

use crate::error::BridgeError;
use crate::host::ScriptHost;
use crate::registry::IMAGE_TYPE_TAG;
use crate::runtime::{Dynamic, ObjectHandle};
use crate::types::{CacheMode, NativeImage};

impl ScriptHost {
    /// Transfer one owning image reference into the script domain.
    ///
    /// Ensures the wrapped-image type is loaded, forces the resource's
    /// cache mode to `Never` so the script-owned copy is the canonical
    /// live reference, wraps the image in a new heap object tagged
    /// [`IMAGE_TYPE_TAG`], and pushes that object as the single result
    /// value. Pushing the same underlying resource twice yields two
    /// independent handles with independent teardown.
    pub fn push_image(&mut self, image: NativeImage) -> Result<ObjectHandle, BridgeError> {
        let (stack, heap, registry, _) = self.parts_mut();
        registry.ensure_loaded(IMAGE_TYPE_TAG)?;

        image.set_cache_mode(CacheMode::Never);
        let handle = heap.allocate(IMAGE_TYPE_TAG, image);
        stack.push(Dynamic::Userdata(handle));
        Ok(handle)
    }

    /// Borrow the image held by a wrapped handle on the stack.
    ///
    /// No ownership moves; the returned reference is valid only while the
    /// handle stays alive and the host is not mutated. The value at
    /// `position` must be a live userdata of exactly the wrapped-image
    /// tag. Anything else is a violated caller contract and fails with
    /// the strict [`BridgeError::CheckFailed`] severity, never with a
    /// script-visible error.
    pub fn pull_image(&mut self, position: usize) -> Result<&NativeImage, BridgeError> {
        self.registry_mut().ensure_loaded(IMAGE_TYPE_TAG)?;

        let handle = match self.stack().get(position) {
            Some(Dynamic::Userdata(handle)) => *handle,
            Some(other) => {
                return Err(BridgeError::CheckFailed {
                    position,
                    expected: IMAGE_TYPE_TAG,
                    found: other.type_name().to_string(),
                });
            }
            None => {
                return Err(BridgeError::CheckFailed {
                    position,
                    expected: IMAGE_TYPE_TAG,
                    found: "no value".to_string(),
                });
            }
        };

        match self.heap().tag(handle) {
            Some(IMAGE_TYPE_TAG) => {}
            Some(tag) => {
                return Err(BridgeError::CheckFailed {
                    position,
                    expected: IMAGE_TYPE_TAG,
                    found: tag.to_string(),
                });
            }
            None => {
                return Err(BridgeError::StaleHandle {
                    index: handle.index(),
                });
            }
        }

        // The tag matched, so the payload is a NativeImage by
        // construction; a stale handle was already rejected above.
        self.heap()
            .get::<NativeImage>(handle)
            .ok_or(BridgeError::StaleHandle {
                index: handle.index(),
            })
    }

    /// Drop one script reference to a wrapped object.
    ///
    /// This is the collector's teardown entry point. When the last
    /// reference dies, the type's destroy hook runs on the payload before
    /// it is dropped, which releases the held native reference. Returns
    /// true if the object was freed; releasing an already dead handle is
    /// a no-op.
    pub fn release_handle(&mut self, handle: ObjectHandle) -> bool {
        let (_, heap, registry, _) = self.parts_mut();
        match heap.release(handle) {
            Some((tag, mut payload)) => {
                if let Some(behavior) = registry.behavior(tag) {
                    behavior.run_destroy(payload.as_mut());
                }
                true
            }
            None => false,
        }
    }
}
