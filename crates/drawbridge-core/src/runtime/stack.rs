//! The scripting stack and its pending-error slot.

use crate::error::ScriptError;

use super::Dynamic;

/// The ordered sequence of values passed between native and script code
/// during a single call.
///
/// Positions are 1-based, matching the embedded runtime's convention. A
/// position past the top is *absent*: it never held a value, which the
/// converters treat the same as an explicit nil.
///
/// The stack also carries the script-visible error channel. Native code
/// raises an error with [`raise_error`](Self::raise_error); the runtime's
/// own unwind later collects it with [`take_error`](Self::take_error).
/// Raising never unwinds native code.
#[derive(Debug, Default)]
pub struct ScriptStack {
    values: Vec<Dynamic>,
    pending_error: Option<ScriptError>,
}

impl ScriptStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: Dynamic) {
        self.values.push(value);
    }

    /// Pop the top value, if any.
    pub fn pop(&mut self) -> Option<Dynamic> {
        self.values.pop()
    }

    /// The value at a 1-based position, or `None` when the position is
    /// absent (0, or past the top).
    pub fn get(&self, position: usize) -> Option<&Dynamic> {
        if position == 0 {
            return None;
        }
        self.values.get(position - 1)
    }

    /// Number of values currently on the stack (the top position).
    pub fn top(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record a catchable error for the scripting environment.
    ///
    /// A later raise replaces an uncollected earlier one; conversions are
    /// single operations, so at most one error is ever pending per call.
    pub fn raise_error(&mut self, message: impl Into<String>) {
        self.pending_error = Some(ScriptError::new(message));
    }

    pub fn has_pending_error(&self) -> bool {
        self.pending_error.is_some()
    }

    /// Collect the pending error, clearing the slot.
    ///
    /// This is the runtime unwind's entry point, the analog of a protected
    /// call observing the raised error.
    pub fn take_error(&mut self) -> Option<ScriptError> {
        self.pending_error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        let mut stack = ScriptStack::new();
        stack.push(Dynamic::Number(1.0));
        stack.push(Dynamic::Bool(true));

        assert_eq!(stack.get(1), Some(&Dynamic::Number(1.0)));
        assert_eq!(stack.get(2), Some(&Dynamic::Bool(true)));
        assert_eq!(stack.get(0), None);
        assert_eq!(stack.get(3), None);
        assert_eq!(stack.top(), 2);
    }

    #[test]
    fn pop_returns_top_value() {
        let mut stack = ScriptStack::new();
        stack.push(Dynamic::Nil);
        assert_eq!(stack.pop(), Some(Dynamic::Nil));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn raise_and_take_error() {
        let mut stack = ScriptStack::new();
        assert!(!stack.has_pending_error());

        stack.raise_error("bad argument");
        assert!(stack.has_pending_error());

        let err = stack.take_error().unwrap();
        assert_eq!(err.message, "bad argument");
        assert!(!stack.has_pending_error());
        assert!(stack.take_error().is_none());
    }

    #[test]
    fn later_raise_replaces_pending() {
        let mut stack = ScriptStack::new();
        stack.raise_error("first");
        stack.raise_error("second");
        assert_eq!(stack.take_error().unwrap().message, "second");
    }
}
