//! Lazy type-behavior registration for wrapped userdata types.
//!
//! Wrapped types are identified by a stable, versionless tag string. The
//! tag is used both to request loading and to type-check handles, so it
//! must never change once handles exist in the wild.

use std::any::Any;

use rustc_hash::FxHashMap;

use crate::error::BridgeError;

/// Stable tag of the wrapped-image userdata type.
pub const IMAGE_TYPE_TAG: &str = "drawbridge.image";

/// Hook run on a wrapped object's payload just before it is dropped.
pub type DestroyHook = Box<dyn Fn(&mut (dyn Any + Send)) + Send>;

/// Loader that produces a type's behavior on first use.
pub type TypeLoader = fn() -> TypeBehavior;

/// The registered behavior of a wrapped userdata type.
pub struct TypeBehavior {
    display_name: &'static str,
    on_destroy: Option<DestroyHook>,
}

impl TypeBehavior {
    pub fn new(display_name: &'static str) -> Self {
        Self {
            display_name,
            on_destroy: None,
        }
    }

    /// Attach a destroy hook, run when the last script reference dies.
    pub fn with_destroy_hook(mut self, hook: DestroyHook) -> Self {
        self.on_destroy = Some(hook);
        self
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub(crate) fn run_destroy(&self, payload: &mut (dyn Any + Send)) {
        if let Some(hook) = &self.on_destroy {
            hook(payload);
        }
    }
}

/// Registry of loaded type behaviors, keyed by tag.
///
/// Loading follows the embedded runtime's require-style convention:
/// behaviors are installed lazily on first use and
/// [`ensure_loaded`](Self::ensure_loaded) is idempotent, so every entry
/// point that touches a wrapped type can call it defensively.
pub struct TypeRegistry {
    loaded: FxHashMap<&'static str, TypeBehavior>,
    loaders: FxHashMap<&'static str, TypeLoader>,
}

impl TypeRegistry {
    /// Create a registry with the built-in image type loadable.
    pub fn new() -> Self {
        let mut loaders: FxHashMap<&'static str, TypeLoader> = FxHashMap::default();
        loaders.insert(IMAGE_TYPE_TAG, image_behavior);
        Self {
            loaded: FxHashMap::default(),
            loaders,
        }
    }

    /// Make an additional wrapped type loadable under a tag.
    pub fn register_loader(&mut self, tag: &'static str, loader: TypeLoader) {
        self.loaders.insert(tag, loader);
    }

    /// Guarantee a tag's behavior is loaded before first use.
    ///
    /// The first call runs the tag's loader; later calls are no-ops.
    pub fn ensure_loaded(&mut self, tag: &str) -> Result<(), BridgeError> {
        if self.loaded.contains_key(tag) {
            return Ok(());
        }
        let (tag, loader) = match self.loaders.get_key_value(tag) {
            Some((tag, loader)) => (*tag, *loader),
            None => {
                return Err(BridgeError::UnknownTypeTag {
                    tag: tag.to_string(),
                });
            }
        };
        self.loaded.insert(tag, loader());
        Ok(())
    }

    pub fn is_loaded(&self, tag: &str) -> bool {
        self.loaded.contains_key(tag)
    }

    /// The loaded behavior for a tag, if any.
    pub fn behavior(&self, tag: &str) -> Option<&TypeBehavior> {
        self.loaded.get(tag)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn image_behavior() -> TypeBehavior {
    // The image payload's strong reference is released by drop; no extra
    // teardown is needed beyond the default.
    TypeBehavior::new("image")
}
