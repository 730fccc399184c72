//! Links objects and the link capabilities resources can implement

use crate::types::ResourceObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A link object: an `href` plus optional meta
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkObject {
    /// Link target; the object is empty when this is empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,

    /// Non-standard meta information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl LinkObject {
    /// Create a link object with the given target
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            meta: None,
        }
    }
}

/// Value of a `self` or `related` link member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    /// A plain URL string
    Href(String),
    /// A link object
    Object(LinkObject),
    /// Any other wire shape; rejected by [`Link::check`]
    Other(Value),
}

impl From<&str> for LinkValue {
    fn from(href: &str) -> Self {
        LinkValue::Href(href.to_string())
    }
}

impl From<String> for LinkValue {
    fn from(href: String) -> Self {
        LinkValue::Href(href)
    }
}

impl From<LinkObject> for LinkValue {
    fn from(object: LinkObject) -> Self {
        LinkValue::Object(object)
    }
}

/// A links object
///
/// `first`, `last`, `next` and `previous` carry pagination links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Link {
    /// Link to the resource or document itself
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<LinkValue>,

    /// Link to a related resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<LinkValue>,

    /// First page
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first: String,

    /// Last page
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last: String,

    /// Next page
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next: String,

    /// Previous page
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub previous: String,
}

impl Link {
    /// A links object with only `self` set
    pub fn to_self(self_link: impl Into<LinkValue>) -> Self {
        Self {
            self_link: Some(self_link.into()),
            ..Self::default()
        }
    }

    /// A links object with only `related` set
    pub fn to_related(related: impl Into<LinkValue>) -> Self {
        Self {
            related: Some(related.into()),
            ..Self::default()
        }
    }

    /// Set the `related` member
    pub fn with_related(mut self, related: impl Into<LinkValue>) -> Self {
        self.related = Some(related.into());
        self
    }

    /// Set the pagination members
    pub fn with_pagination(
        mut self,
        first: impl Into<String>,
        last: impl Into<String>,
        next: impl Into<String>,
        previous: impl Into<String>,
    ) -> Self {
        self.first = first.into();
        self.last = last.into();
        self.next = next.into();
        self.previous = previous.into();
        self
    }
}

/// Implemented by domain types that produce resource-level links
pub trait Linkable {
    /// Links for the resource, if any
    fn link(&self) -> Option<Link>;
}

/// Implemented by domain types that produce links for their relationships
pub trait LinkableRelation {
    /// Links for the named relationship, if any
    fn link_relation(&self, relation: &str) -> Option<Link>;
}

impl ResourceObject {
    /// Install the resource-level links produced by `source`
    ///
    /// The links are validated with [`Link::check`] before being stored.
    pub fn apply_links<L: Linkable + ?Sized>(&mut self, source: &L) -> crate::Result<()> {
        if let Some(mut link) = source.link() {
            link.check()?;
            self.links = Some(link);
        }
        Ok(())
    }

    /// Install relationship links produced by `source` on every relationship
    pub fn apply_relation_links<L: LinkableRelation + ?Sized>(
        &mut self,
        source: &L,
    ) -> crate::Result<()> {
        for (name, relationship) in self.relationships.iter_mut() {
            if let Some(mut link) = source.link_relation(name) {
                link.check()?;
                relationship.links = Some(link);
            }
        }
        Ok(())
    }
}
