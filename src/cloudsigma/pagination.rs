//! Pagination envelope for CloudSigma list responses
//!
//! Every list endpoint answers `{"objects": [...], "meta": {...}}` where
//! `meta` carries the window (`limit`, `offset`) and the server-side
//! `total_count`. A page plus its metadata is enough to derive the marker
//! for the next page; no other state is kept between fetches.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Marker selecting a window of a server-side listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PaginationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Render as query parameters
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }

    /// Rebuild options from an untyped marker value.
    ///
    /// Markers travel as opaque JSON between calls; anything that is not a
    /// pagination-options object is rejected rather than reinterpreted.
    pub fn from_marker(marker: &Value) -> Result<Self> {
        let map = marker.as_object().ok_or_else(|| {
            anyhow::anyhow!(
                "pagination marker must be a pagination options object, got {}",
                json_type_name(marker)
            )
        })?;

        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "limit" => {
                    options.limit =
                        Some(value.as_u64().context("limit must be an unsigned integer")?)
                }
                "offset" => {
                    options.offset =
                        Some(value.as_u64().context("offset must be an unsigned integer")?)
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "unexpected field in pagination marker: {}",
                        other
                    ))
                }
            }
        }
        Ok(options)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pagination metadata returned with every list response
///
/// Immutable after construction; a `limit` of 0 means the server applied no
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub limit: u64,
    pub offset: u64,
    pub total_count: u64,
}

/// One page of results plus the metadata needed to reach the next
#[derive(Debug, Clone)]
pub struct PaginatedCollection<T> {
    /// Items in server response order
    pub items: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Deserialize)]
struct Envelope<T> {
    objects: Vec<T>,
    meta: PageMeta,
}

impl<T: serde::de::DeserializeOwned> PaginatedCollection<T> {
    /// Parse a CloudSigma list envelope
    pub fn from_response(body: &Value) -> Result<Self> {
        let envelope: Envelope<T> = serde_json::from_value(body.clone())
            .context("response is not a paginated list envelope")?;
        Ok(Self {
            items: envelope.objects,
            meta: envelope.meta,
        })
    }
}

impl<T> PaginatedCollection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Marker for the page after this one, or `None` when the listing is
    /// exhausted
    pub fn next_options(&self) -> Option<PaginationOptions> {
        let consumed = self.meta.offset + self.items.len() as u64;
        if consumed < self.meta.total_count {
            Some(PaginationOptions {
                limit: Some(self.meta.limit).filter(|l| *l > 0),
                offset: Some(consumed),
            })
        } else {
            None
        }
    }
}

impl<T> IntoIterator for PaginatedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
