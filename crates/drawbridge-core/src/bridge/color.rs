//! Script color table to native [`Color`] conversion.

use crate::host::ScriptHost;
use crate::runtime::Dynamic;
use crate::types::Color;

impl ScriptHost {
    /// Read a color from the stack, falling back to `default` when no
    /// value is supplied.
    ///
    /// Behavior by the dynamic kind at `position`:
    ///
    /// - absent or nil: `default`, unchanged;
    /// - a table: the `red`, `green`, `blue` and `alpha` fields are read
    ///   independently as numbers. A missing or non-numeric field keeps
    ///   its channel zero-value (0.0, alpha 1.0) rather than the matching
    ///   channel of `default`, so a partial table gets zero-filled
    ///   channels, not a blend with the default color;
    /// - anything else: a diagnostic naming the kind goes to the sink, a
    ///   catchable error is raised for the script, and the call yields
    ///   `None`. Callers must check before using the result.
    pub fn color_at(&mut self, position: usize, default: Color) -> Option<Color> {
        let (stack, _, _, sink) = self.parts_mut();

        let kind = match stack.get(position) {
            None | Some(Dynamic::Nil) => return Some(default),
            Some(Dynamic::Table(table)) => {
                let red = table.get_number("red").unwrap_or(0.0);
                let green = table.get_number("green").unwrap_or(0.0);
                let blue = table.get_number("blue").unwrap_or(0.0);
                let alpha = table.get_number("alpha").unwrap_or(1.0);
                return Some(Color::srgb(red, green, blue, alpha));
            }
            Some(other) => other.type_name(),
        };

        sink.log_diagnostic(&format!(
            "color_at: unexpected type passed as a color: {kind}"
        ));
        stack.raise_error(format!("unexpected type passed as a color: {kind}"));
        None
    }

    /// Convenience form of [`color_at`](Self::color_at) defaulting to
    /// opaque black.
    pub fn color_at_or_black(&mut self, position: usize) -> Option<Color> {
        self.color_at(position, Color::BLACK)
    }
}
