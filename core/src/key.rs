//! Row keys: possibly-composite row identifiers.

use std::fmt;

use crate::Value;

/// The identifying key of a row: an ordered, fixed-width tuple of
/// scalar components. Most tables use a single component; re-keying
/// from several columns produces composite keys.
///
/// Keys are compared by component equality only; row *order* is a
/// structural property of the table, never derived from key order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowKey(Vec<Value>);

impl RowKey {
    /// A single-component key.
    pub fn single(component: impl Into<Value>) -> Self {
        Self(vec![component.into()])
    }

    /// A composite key from its components, in order.
    pub fn composite(components: Vec<Value>) -> Self {
        Self(components)
    }

    /// Number of components.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The components, in order.
    pub fn components(&self) -> &[Value] {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{}", single),
            components => {
                write!(f, "(")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<Value> for RowKey {
    fn from(v: Value) -> Self {
        RowKey::single(v)
    }
}

/// The display name of one key component: its own name when present,
/// `index` for the single component of a width-1 key, `level_{i}`
/// inside a composite one. Shared by every surface that writes
/// component names (headers, CSV export, form prompts).
pub fn index_component_name(width: usize, position: usize, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if width == 1 => "index".to_string(),
        _ => format!("level_{}", position),
    }
}
