use crate::core::decode::DecodeError;
use serde::Serialize;
use serde_json::Value;

/// A fixed-width numeric embedding, widened to `f32` whatever its wire encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmbeddingVector {
    values: Vec<f32>,
}

impl EmbeddingVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }

    /// Extracts an embedding from a decoded JSON payload.
    ///
    /// Accepts either a top-level array of numbers or an object whose `embedding`
    /// field is such an array.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnEmbedding`] for any other shape, or when an
    /// element is not a number.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("embedding") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(DecodeError::NotAnEmbedding(
                        "object has no `embedding` array".to_string(),
                    ));
                }
            },
            other => {
                return Err(DecodeError::NotAnEmbedding(format!(
                    "expected an array or object, found {}",
                    json_kind(other)
                )));
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64().map(|v| v as f32).ok_or_else(|| {
                    DecodeError::NotAnEmbedding(format!(
                        "element {} is {}, not a number",
                        i,
                        json_kind(item)
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
