//! Marshalling boundary between an embedded scripting runtime and native
//! graphical resources.
//!
//! Scripts see colors as tables with named numeric channels and bitmap
//! images as opaque typed handles. This crate converts both directions,
//! manages resource lifetime across the two ownership models, and turns
//! malformed script input into a recoverable script-visible error instead
//! of a native crash.
//!
//! ## Key Types
//!
//! - [`ScriptHost`]: the single scripting thread's state (stack, heap,
//!   type registry, report sink) and home of all conversion operations
//! - [`Dynamic`]: runtime value at a stack position
//! - [`Color`] / [`NativeImage`]: the native resource types crossing the
//!   boundary
//! - [`ObjectHeap`]: generational arena holding script-owned userdata
//!
//! ## Error Severities
//!
//! Two distinct failure modes, deliberately asymmetric:
//!
//! - bad *user* input (a number where a color table was expected) is
//!   logged, raised as a catchable script error, and the conversion yields
//!   no value;
//! - a violated *caller* contract (pulling an image from a non-image
//!   value) is a hard [`BridgeError::CheckFailed`], since it indicates a
//!   bug in native code rather than in a script.

pub mod bridge;
pub mod error;
pub mod host;
pub mod registry;
pub mod reporting;
pub mod runtime;
pub mod types;

pub use error::{BridgeError, ScriptError};
pub use host::{HostId, ScriptHost};
pub use registry::{IMAGE_TYPE_TAG, TypeBehavior, TypeRegistry};
pub use reporting::{LogSink, MemorySink, ReportSink};
pub use runtime::{Dynamic, ObjectHandle, ObjectHeap, ScriptStack, Table};
pub use types::{CacheMode, Color, NativeImage};
