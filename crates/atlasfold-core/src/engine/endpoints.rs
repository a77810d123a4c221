use crate::core::models::sequence::{ProteinId, Sequence};
use std::fmt;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const ACCEPT_OCTET_STREAM: &str = "application/octet-stream";

/// Embeddings are served from the ESM2 model family only.
const EMBEDDING_MODEL: &str = "ESM2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A fully resolved outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Builds requests for every ESM Atlas endpoint under a common base URL.
///
/// Protein identifiers are inserted into the path verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /foldSequence/v1/pdb/` with the sequence as a form-encoded body.
    pub fn fold_sequence(&self, sequence: &Sequence) -> ApiRequest {
        ApiRequest::post(
            format!("{}/foldSequence/v1/pdb/", self.base_url),
            sequence.as_str(),
        )
        .header("Content-Type", CONTENT_TYPE_FORM)
    }

    pub fn predicted_structure(&self, id: &ProteinId) -> ApiRequest {
        ApiRequest::get(format!("{}/fetchPredictedStructure/{}", self.base_url, id))
    }

    pub fn confidence_prediction(&self, id: &ProteinId) -> ApiRequest {
        ApiRequest::get(format!(
            "{}/fetchConfidencePrediction/{}",
            self.base_url, id
        ))
    }

    pub fn sequence(&self, id: &ProteinId) -> ApiRequest {
        ApiRequest::get(format!("{}/fetchSequence/{}", self.base_url, id))
    }

    pub fn embedding_json(&self, id: &ProteinId) -> ApiRequest {
        ApiRequest::get(format!(
            "{}/fetchEmbedding/{}/{}.json",
            self.base_url, EMBEDDING_MODEL, id
        ))
    }

    pub fn embedding_binary(&self, id: &ProteinId) -> ApiRequest {
        ApiRequest::get(format!(
            "{}/fetchEmbedding/{}/{}.bin",
            self.base_url, EMBEDDING_MODEL, id
        ))
        .header("Accept", ACCEPT_OCTET_STREAM)
    }
}
