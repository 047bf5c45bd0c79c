//! URL state persistence for mock pages
//!
//! Control values travel in the `state` query parameter as base64url-encoded
//! JSON objects of string pairs.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid base64url encoding")]
    InvalidBase64,
    #[error("invalid state payload: {0}")]
    InvalidJson(String),
}

/// Decode a state string into key-value pairs, sorted by key.
pub fn decode_state(encoded: &str) -> Result<Vec<(String, String)>, StateError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| StateError::InvalidBase64)?;
    let map: BTreeMap<String, String> =
        serde_json::from_slice(&bytes).map_err(|e| StateError::InvalidJson(e.to_string()))?;
    Ok(map.into_iter().collect())
}

/// Like [`decode_state`], but a missing or malformed state means "all defaults".
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }
    decode_state(encoded).unwrap_or_else(|e| {
        tracing::warn!("Ignoring mock state '{}': {}", encoded, e);
        Vec::new()
    })
}

/// Encode key-value pairs into a state string.
pub fn encode_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    // A map of strings always serializes
    let json = serde_json::to_string(&map).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Collects non-default control values into a state string
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` only when it differs from `default`.
    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            let raw = if value { "1" } else { "0" };
            self.pairs.push((key.to_string(), raw.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// `None` when nothing differs from the defaults, keeping the URL clean.
    pub fn build_option(self) -> Option<String> {
        (!self.pairs.is_empty()).then(|| encode_state(&self.pairs))
    }
}
