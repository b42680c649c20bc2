//! Runtime value type for stack positions.

use rustc_hash::FxHashMap;

use super::ObjectHandle;

/// A dynamic value at a scripting stack position.
///
/// This enum is the closed set of kinds the converters branch on: each
/// conversion decides the kind once at entry and matches exhaustively,
/// which keeps the "unexpected kind" branch a single explicit arm.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// Explicit nil.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value (owned).
    String(String),
    /// Associative table.
    Table(Table),
    /// Handle to heap-allocated userdata (wrapped native resources).
    Userdata(ObjectHandle),
}

impl Dynamic {
    /// The script-visible kind name, as used in diagnostics and error
    /// messages surfaced to scripts.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Nil => "nil",
            Dynamic::Bool(_) => "boolean",
            Dynamic::Number(_) => "number",
            Dynamic::String(_) => "string",
            Dynamic::Table(_) => "table",
            Dynamic::Userdata(_) => "userdata",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Dynamic::Nil)
    }
}

/// An associative script table with string keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    fields: FxHashMap<String, Dynamic>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Dynamic) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        self.fields.get(key)
    }

    /// Read a field as a number.
    ///
    /// Returns `None` when the field is absent or holds a non-numeric
    /// value; the caller decides what the missing-field default is.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        match self.fields.get(key) {
            Some(Dynamic::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
