//! The modelled scripting runtime surface.
//!
//! Only the parts of the runtime the marshalling boundary touches live
//! here: the value representation at a stack position, the stack itself
//! with its pending-error slot, and the heap that owns wrapped userdata.
//!
//! ## Key Types
//!
//! - [`Dynamic`]: tagged union over the script kinds a stack position can hold
//! - [`Table`]: associative structure with string keys
//! - [`ScriptStack`]: the values passed across one native/script call
//! - [`ObjectHeap`]: generational arena for script-owned userdata

mod dynamic;
mod object_heap;
mod stack;

pub use dynamic::{Dynamic, Table};
pub use object_heap::{ObjectHandle, ObjectHeap};
pub use stack::ScriptStack;
