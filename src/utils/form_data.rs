use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body is not valid UTF-8")]
    InvalidUtf8,

    #[error("JSON body must be an object")]
    NotAnObject,

    #[error("JSON field `{0}` must be a scalar")]
    NestedValue(String),

    #[error("form field is not valid UTF-8 after decoding")]
    InvalidEncoding,
}

/// Request body normalized to a flat key/value map.
///
/// JSON objects are tried first. Anything that isn't JSON is read as
/// `application/x-www-form-urlencoded`, keeping the first value of a repeated key.
/// A JSON `null` is kept as a present key with no value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, Option<String>>,
}

impl FormData {
    pub fn parse(body: &[u8]) -> Result<Self, BodyError> {
        let text = std::str::from_utf8(body).map_err(|_| BodyError::InvalidUtf8)?;

        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_json(value),
            Err(_) => Self::from_urlencoded(text),
        }
    }

    fn from_json(value: Value) -> Result<Self, BodyError> {
        let Value::Object(map) = value else {
            return Err(BodyError::NotAnObject);
        };

        let mut fields = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let value = match value {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Null => None,
                Value::Array(_) | Value::Object(_) => return Err(BodyError::NestedValue(key)),
            };
            fields.insert(key, value);
        }

        Ok(FormData { fields })
    }

    fn from_urlencoded(text: &str) -> Result<Self, BodyError> {
        let mut fields = HashMap::new();

        for pair in text.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            let value = decode_component(value)?;
            fields.entry(key).or_insert(Some(value));
        }

        Ok(FormData { fields })
    }

    /// `None` when the key is absent, `Some(None)` for an explicit JSON `null`.
    pub fn field(&self, key: &str) -> Option<Option<&str>> {
        self.fields.get(key).map(Option::as_deref)
    }
}

fn decode_component(raw: &str) -> Result<String, BodyError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|_| BodyError::InvalidEncoding)
}
