//! Error types for the marshalling boundary.
//!
//! Two severities live here and they are not interchangeable:
//!
//! - [`ScriptError`] is the recoverable kind. It is recorded on the
//!   [`ScriptStack`](crate::runtime::ScriptStack) and surfaced inside the
//!   scripting environment as a catchable error. It must never terminate
//!   the host process.
//! - [`BridgeError`] is the strict kind, returned to *native* callers when
//!   they violate a contract (wrong userdata tag, stale handle, unknown
//!   type tag). It indicates a bug in calling code, not bad script input.

use thiserror::Error;

/// Hard contract failures reported to native callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// A stack value failed a strict type check.
    ///
    /// This is the assertion-style failure mode used for internal argument
    /// validation. It is never converted into a script-visible error.
    #[error("check failed at stack position {position}: expected {expected}, found {found}")]
    CheckFailed {
        /// The 1-based stack position that was checked.
        position: usize,
        /// The expected type tag or kind name.
        expected: &'static str,
        /// What was actually there.
        found: String,
    },

    /// A handle referenced a heap slot that has already been freed.
    #[error("stale handle: object at index {index} has been freed")]
    StaleHandle { index: u32 },

    /// No behavior is registered or loadable for a type tag.
    #[error("no type behavior registered for tag '{tag}'")]
    UnknownTypeTag { tag: String },
}

/// A catchable error raised into the scripting environment.
///
/// Raising one does not unwind native code; the conversion call that raised
/// it returns normally to its own caller with no usable value, and the
/// runtime's own error path picks the message up later.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ScriptError {
    /// The message shown to the script.
    pub message: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
