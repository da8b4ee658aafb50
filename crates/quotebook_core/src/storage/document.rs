//! On-disk document shape.

use crate::model::quote::Quote;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level quotes document: `{ "quotes": [ {text, author}, ... ] }`.
///
/// Keys other than `quotes` are carried in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotesDocument {
    pub quotes: Vec<Quote>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuotesDocument {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            extra: Map::new(),
        }
    }

    /// Parses document bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Encodes the document pretty-printed with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
