//! Props and State
//!
//! Both are insertion-ordered maps from names to JSON values, so attributes
//! are applied in the order they were written.

use indexmap::IndexMap;
use serde_json::Value;

/// Properties passed to an element or component.
pub type Props = IndexMap<String, Value>;

/// Component state.
pub type State = IndexMap<String, Value>;

/// Build a props map.
///
/// Returns `Some` so the result can be passed straight to [`h`](super::h).
///
/// ```rust
/// use arbor_core::vnode::props;
///
/// let attrs = props([("class", "app"), ("id", "root")]);
/// assert_eq!(attrs.unwrap().len(), 2);
/// ```
pub fn props<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Option<Props>
where
    K: Into<String>,
    V: Into<Value>,
{
    Some(collect(entries))
}

/// Build a state map.
pub fn state<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> State
where
    K: Into<String>,
    V: Into<Value>,
{
    collect(entries)
}

fn collect<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> IndexMap<String, Value>
where
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Convert a JSON object into props. Anything that is not an object gives `None`.
pub fn from_json(value: Value) -> Option<Props> {
    match value {
        Value::Object(map) => Some(map.into_iter().collect()),
        _ => None,
    }
}

/// The string an attribute value is stored as.
///
/// Follows DOM `setAttribute` coercion: strings are used verbatim, `null`
/// becomes `"null"`, numbers print as JavaScript prints them, arrays are
/// joined with commas (null entries empty), and objects become
/// `"[object Object]"`.
pub fn attribute_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => number_text(f),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => attribute_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JavaScript number-to-string: plain decimals in `[1e-6, 1e21)`, exponent
/// form with an explicit sign outside it, and `"0"` for negative zero.
fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
