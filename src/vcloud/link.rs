//! vCloud Director Link type
//!
//! Mirrors the schema's `LinkType`: a typed hyperlink whose `rel` names the
//! operation or relationship it represents. The relationship also implies
//! the HTTP verb to use against the link's `href`.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Well-known relation values
pub mod rel {
    pub const UP: &str = "up";
    pub const DOWN: &str = "down";
    pub const EDIT: &str = "edit";
    pub const ADD: &str = "add";
    pub const REMOVE: &str = "remove";
    pub const ALTERNATE: &str = "alternate";
    pub const TASK_CANCEL: &str = "task:cancel";
}

/// A typed hyperlink attached to a vCloud resource
///
/// Immutable value; equality, hashing, and Debug derive structurally from
/// all fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Target locator. The schema permits its absence, so presence is not
    /// checked at construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Url>,
    /// Relationship of the link to the object containing it
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Media type of the linked representation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Link {
    pub fn builder() -> LinkBuilder {
        LinkBuilder::default()
    }

    /// Builder pre-populated with this link's fields
    pub fn to_builder(&self) -> LinkBuilder {
        LinkBuilder {
            href: self.href.clone(),
            rel: Some(self.rel.clone()),
            id: self.id.clone(),
            media_type: self.media_type.clone(),
            name: self.name.clone(),
        }
    }
}

/// Accumulates link fields; only `rel` is required at [`LinkBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    href: Option<Url>,
    rel: Option<String>,
    id: Option<String>,
    media_type: Option<String>,
    name: Option<String>,
}

impl LinkBuilder {
    pub fn href(mut self, href: Url) -> Self {
        self.href = Some(href);
        self
    }

    pub fn rel(mut self, rel: &str) -> Self {
        self.rel = Some(rel.to_string());
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn media_type(mut self, media_type: &str) -> Self {
        self.media_type = Some(media_type.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Produce the immutable link; fails when `rel` was never set
    pub fn build(self) -> Result<Link> {
        let rel = self.rel.ok_or_else(|| anyhow!("rel is required"))?;

        Ok(Link {
            href: self.href,
            rel,
            id: self.id,
            media_type: self.media_type,
            name: self.name,
        })
    }
}
