//! The single scripting thread's state.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::BridgeError;
use crate::registry::TypeRegistry;
use crate::reporting::{LogSink, ReportSink};
use crate::runtime::{Dynamic, ObjectHeap, ScriptStack};

static NEXT_HOST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a host instance.
///
/// Embedders that stash a host id can later compare it against the active
/// host to detect that the scripting state they captured is still the
/// canonical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(u64);

/// Owner of the scripting stack, the userdata heap, the type registry,
/// and the report sink.
///
/// All conversion operations are methods on this type. A host is driven
/// from exactly one thread at a time; callers hold `&mut` access for the
/// duration of a conversion, which is the exclusivity the underlying
/// runtime contract requires. No operation suspends or blocks.
pub struct ScriptHost {
    id: HostId,
    stack: ScriptStack,
    heap: ObjectHeap,
    registry: TypeRegistry,
    sink: Box<dyn ReportSink>,
}

impl ScriptHost {
    /// Create a host with the default sink (`log` facade plus stdout).
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogSink))
    }

    /// Create a host reporting through a caller-supplied sink.
    pub fn with_sink(sink: Box<dyn ReportSink>) -> Self {
        Self {
            id: HostId(NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed)),
            stack: ScriptStack::new(),
            heap: ObjectHeap::new(),
            registry: TypeRegistry::new(),
            sink,
        }
    }

    pub fn id(&self) -> HostId {
        self.id
    }

    pub fn stack(&self) -> &ScriptStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut ScriptStack {
        &mut self.stack
    }

    pub fn heap(&self) -> &ObjectHeap {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut ObjectHeap {
        &mut self.heap
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    pub(crate) fn parts_mut(
        &mut self,
    ) -> (
        &mut ScriptStack,
        &mut ObjectHeap,
        &mut TypeRegistry,
        &dyn ReportSink,
    ) {
        (
            &mut self.stack,
            &mut self.heap,
            &mut self.registry,
            self.sink.as_ref(),
        )
    }

    /// Write a line to the user-visible console.
    pub fn print_to_console(&self, text: &str) {
        self.sink.print_line(text);
    }

    /// Log a diagnostic and raise the same message as a catchable script
    /// error.
    ///
    /// The conversion that called this returns normally afterwards; only
    /// the script-side control flow is diverted.
    pub fn show_error(&mut self, message: &str) {
        self.sink.log_diagnostic(message);
        self.stack.raise_error(message);
    }

    /// Strict stack string accessor.
    ///
    /// Contract-checked like [`pull_image`](Self::pull_image): a non-string
    /// value at the position is a caller bug, not a script error.
    pub fn check_string(&self, position: usize) -> Result<&str, BridgeError> {
        match self.stack.get(position) {
            Some(Dynamic::String(s)) => Ok(s),
            Some(other) => Err(BridgeError::CheckFailed {
                position,
                expected: "string",
                found: other.type_name().to_string(),
            }),
            None => Err(BridgeError::CheckFailed {
                position,
                expected: "string",
                found: "no value".to_string(),
            }),
        }
    }
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}
