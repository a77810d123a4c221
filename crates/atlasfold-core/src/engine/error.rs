use crate::core::decode::DecodeError;
use crate::core::io::pdb::ParseError;
use thiserror::Error;

const BODY_EXCERPT_CHARS: usize = 200;

/// A failed HTTP exchange: network or transport failure (`status` is `None`) or a
/// non-2xx response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("HTTP request failed: {message}")]
pub struct HttpError {
    pub status: Option<u16>,
    pub message: String,
}

impl HttpError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Describes a non-2xx response, quoting the start of the response body.
    pub fn from_status(status: u16, reason: Option<&str>, url: &str, body: &[u8]) -> Self {
        let mut message = match reason {
            Some(reason) => format!("{} {} for url ({})", status, reason, url),
            None => format!("{} for url ({})", status, url),
        };

        let excerpt: String = String::from_utf8_lossy(body)
            .trim()
            .chars()
            .take(BODY_EXCERPT_CHARS)
            .collect();
        if !excerpt.is_empty() {
            message.push_str(": ");
            message.push_str(&excerpt);
        }

        Self {
            status: Some(status),
            message,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: describe_chain(&err),
        }
    }
}

/// Joins an error and its `source()` chain with `": "`, skipping causes whose
/// text is already part of the message.
fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
