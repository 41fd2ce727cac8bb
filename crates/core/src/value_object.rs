//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::Serialize;
use serde_json::Value;

/// Marker trait for value objects, plus their canonical string form.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Immutability
///
/// Value objects expose no mutating API. To "modify" one, build a new one with the
/// new values.
///
/// ## Canonical string
///
/// [`to_canonical_string`](ValueObject::to_canonical_string) renders a single-field
/// record as the bare field value and anything wider as a JSON-shaped mapping in
/// declaration order:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// struct Range {
///     from: String,
///     to: String,
/// }
///
/// impl ValueObject for Range {}
///
/// let r = Range { from: "a".into(), to: "b".into() };
/// assert_eq!(r.to_canonical_string(), r#"{"from": "a", "to": "b"}"#);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Serialize {
    fn to_canonical_string(&self) -> String {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) if fields.len() == 1 => {
                fields.values().next().map(render_bare).unwrap_or_default()
            }
            Ok(value) => render_bare(&value),
            Err(err) => {
                tracing::warn!(error = %err, "value object failed to serialize");
                String::new()
            }
        }
    }
}

/// Implement `Display` through [`ValueObject::to_canonical_string`].
#[macro_export]
macro_rules! impl_value_object_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::fmt::Display for $t {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(&$crate::ValueObject::to_canonical_string(self))
                }
            }
        )+
    };
}

/// Strings render unquoted at the top level; everything else as JSON.
fn render_bare(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => render_json(other),
    }
}

/// JSON with `", "` and `": "` separators.
fn render_json(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", Value::String(k.clone()), render_json(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_json).collect();
            format!("[{}]", items.join(", "))
        }
        scalar => scalar.to_string(),
    }
}
