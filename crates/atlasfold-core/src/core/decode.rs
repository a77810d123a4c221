//! Decoders for the three payload shapes the API returns.
//!
//! Each decoder borrows its input and either consumes it completely or fails; a
//! partially decoded value is never returned.

use crate::core::models::embedding::EmbeddingVector;
use half::f16;
use serde_json::Value;
use thiserror::Error;

const F16_WIDTH: usize = 2;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary payload of {0} bytes is not a whole number of float16 values")]
    OddLength(usize),

    #[error("JSON payload is not an embedding: {0}")]
    NotAnEmbedding(String),
}

/// Decodes a structure-file payload as UTF-8 text.
pub fn decode_text(bytes: &[u8]) -> Result<String, DecodeError> {
    Ok(std::str::from_utf8(bytes)?.to_owned())
}

/// Decodes a JSON payload into a generic value; the API's JSON shapes are not fixed.
pub fn decode_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reinterprets a byte buffer as contiguous little-endian IEEE 754 binary16 values.
///
/// The result has exactly `bytes.len() / 2` elements.
///
/// # Errors
///
/// Returns [`DecodeError::OddLength`] when the buffer length is not even.
pub fn decode_f16_array(bytes: &[u8]) -> Result<EmbeddingVector, DecodeError> {
    if bytes.len() % F16_WIDTH != 0 {
        return Err(DecodeError::OddLength(bytes.len()));
    }

    let values = bytes
        .chunks_exact(F16_WIDTH)
        .map(|pair| f16::from_le_bytes([pair[0], pair[1]]).to_f32())
        .collect();

    Ok(EmbeddingVector::new(values))
}
