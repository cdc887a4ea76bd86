//! The decoded response payload.

use serde_json::Value;

/// The decoded body of a successful request.
///
/// Responses declaring an `application/json` content type decode to
/// [`Payload::Json`]; every other response is returned verbatim as
/// [`Payload::Text`].
///
/// # Examples
///
/// ```
/// use lazydata::Payload;
/// use serde_json::json;
///
/// let payload = Payload::Json(json!({ "user": { "name": "Ada" } }));
///
/// assert_eq!(
///     payload.lookup("user.name"),
///     Some(&json!("Ada")),
/// );
/// assert_eq!(payload.lookup("user.email"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A structured JSON document.
    Json(Value),

    /// A raw text body.
    Text(String),
}

impl Payload {
    /// Returns the JSON document, if this payload is structured.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// Returns the raw text, if this payload is unstructured.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }

    /// Resolves a dot-delimited path against this payload.
    ///
    /// Only JSON payloads can be navigated; looking anything up in a text
    /// payload yields `None`. See [`path::resolve`](crate::path::resolve)
    /// for the navigation rules.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        crate::path::resolve(self.as_json()?, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_payload_is_opaque() {
        let payload = Payload::Text("name: Ada".to_string());
        assert_eq!(payload.as_text(), Some("name: Ada"));
        assert_eq!(payload.as_json(), None);
        assert_eq!(payload.lookup("name"), None);
    }

    #[test]
    fn json_payload_navigates() {
        let payload = Payload::Json(json!({ "items": [1, 2, 3] }));
        assert_eq!(payload.lookup("items.1"), Some(&json!(2)));
    }
}
