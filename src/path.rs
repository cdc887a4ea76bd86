//! Dot-delimited path navigation over JSON values.
//!
//! Data bindings address fetched values with paths like `user.name` or
//! `items.0.id`. Resolution is an explicit walk: objects are stepped into by
//! key, arrays by numeric index, and any miss (an absent key, an
//! out-of-bounds index, or a step into a scalar) short-circuits the whole
//! path to "missing" rather than erroring.

use serde_json::Value;

/// Resolves a dot-delimited `path` against `root`.
///
/// Returns `None` as soon as any step fails; there is no partial result and
/// no default-value syntax.
///
/// # Examples
///
/// ```
/// use lazydata::path::resolve;
/// use serde_json::json;
///
/// let data = json!({ "a": { "b": 2 } });
///
/// assert_eq!(resolve(&data, "a.b"), Some(&json!(2)));
/// assert_eq!(resolve(&data, "a.c"), None);
/// // Stepping past a defined leaf is also a miss.
/// assert_eq!(resolve(&data, "a.b.c"), None);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for part in path.split('.') {
        node = match node {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_object_keys() {
        let data = json!({ "a": { "b": 2 } });
        assert_eq!(resolve(&data, "a.b"), Some(&json!(2)));
        assert_eq!(resolve(&data, "a"), Some(&json!({ "b": 2 })));
    }

    #[test]
    fn missing_key_short_circuits() {
        let data = json!({ "a": { "b": 2 } });
        assert_eq!(resolve(&data, "a.c"), None);
        assert_eq!(resolve(&data, "x.y.z"), None);
    }

    #[test]
    fn stepping_past_a_leaf_short_circuits() {
        let data = json!({ "a": { "b": 2 } });
        assert_eq!(resolve(&data, "a.b.c"), None);
    }

    #[test]
    fn resolves_array_indices() {
        let data = json!({ "items": [{ "id": 7 }, { "id": 9 }] });
        assert_eq!(resolve(&data, "items.1.id"), Some(&json!(9)));
        assert_eq!(resolve(&data, "items.2.id"), None);
        assert_eq!(resolve(&data, "items.one"), None);
    }

    #[test]
    fn empty_path_misses_on_objects() {
        let data = json!({ "a": 1 });
        assert_eq!(resolve(&data, ""), None);
    }

    #[test]
    fn null_leaf_is_still_a_value() {
        let data = json!({ "a": null });
        assert_eq!(resolve(&data, "a"), Some(&Value::Null));
    }
}
