//! Facade crate for the drawbridge marshalling boundary.
//!
//! Everything lives in `drawbridge-core`; this crate re-exports the
//! public surface under one roof for embedders.
//!
//! ```
//! use drawbridge::{Color, Dynamic, ScriptHost, Table};
//!
//! let mut host = ScriptHost::new();
//! let mut table = Table::new();
//! table.insert("red", Dynamic::Number(1.0));
//! host.stack_mut().push(Dynamic::Table(table));
//!
//! let color = host.color_at_or_black(1).unwrap();
//! assert_eq!(color, Color::srgb(1.0, 0.0, 0.0, 1.0));
//! ```

pub use drawbridge_core::{
    BridgeError, CacheMode, Color, Dynamic, HostId, IMAGE_TYPE_TAG, LogSink, MemorySink,
    NativeImage, ObjectHandle, ObjectHeap, ReportSink, ScriptError, ScriptHost, ScriptStack,
    Table, TypeBehavior, TypeRegistry,
};
