//! Core types for JSON:API documents

use crate::links::{Link, LinkValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a resource within a compound document: its `(type, id)` pair
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceIdentity {
    /// Resource type name
    pub resource_type: String,

    /// Resource identifier (may be empty for resources not yet created)
    pub id: String,
}

impl ResourceIdentity {
    /// Create a new identity
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type: {}, ID: {}}}", self.resource_type, self.id)
    }
}

/// A resource object, the addressable unit of a document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceObject {
    /// Resource identifier, omitted on the wire when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Resource type name (always present on the wire)
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Attribute members
    #[serde(
        default,
        deserialize_with = "crate::decoder::null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub attributes: Map<String, Value>,

    /// Relationships keyed by relation name; each value is a nested
    /// document whose primary data are the related resource identifiers
    #[serde(
        default,
        deserialize_with = "crate::decoder::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub relationships: BTreeMap<String, Document>,

    /// Non-standard meta information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Resource-level links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Link>,
}

impl ResourceObject {
    /// Create a resource object with a type and an id
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a relationship
    pub fn with_relationship(mut self, name: impl Into<String>, related: Document) -> Self {
        self.relationships.insert(name.into(), related);
        self
    }

    /// Set meta information
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// The `(type, id)` identity of this resource
    pub fn identity(&self) -> ResourceIdentity {
        ResourceIdentity::new(self.resource_type.clone(), self.id.clone())
    }

    /// A thin copy carrying only type and id, suitable as relationship data
    pub fn identifier(&self) -> ResourceObject {
        ResourceObject::new(self.resource_type.clone(), self.id.clone())
    }
}

/// The wire shape of a document's primary data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataShape {
    /// No primary data (`data` absent or null)
    None,
    /// A single resource object
    One,
    /// An array of resource objects
    Many,
}

/// Primary data of a document
///
/// The variant is fixed at decode time from the wire shape of `data` and
/// decides how `data` is written back on encode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PrimaryData {
    /// `data` absent or null
    #[default]
    None,
    /// `data` is a single resource object
    One(ResourceObject),
    /// `data` is an array, possibly empty
    Many(Vec<ResourceObject>),
}

impl PrimaryData {
    /// The shape of this primary data
    pub fn shape(&self) -> DataShape {
        match self {
            PrimaryData::None => DataShape::None,
            PrimaryData::One(_) => DataShape::One,
            PrimaryData::Many(_) => DataShape::Many,
        }
    }

    /// Primary resources as a slice, regardless of shape
    pub fn resources(&self) -> &[ResourceObject] {
        match self {
            PrimaryData::None => &[],
            PrimaryData::One(resource) => std::slice::from_ref(resource),
            PrimaryData::Many(resources) => resources,
        }
    }

    /// Mutable access to primary resources, regardless of shape
    pub fn resources_mut(&mut self) -> &mut [ResourceObject] {
        match self {
            PrimaryData::None => &mut [],
            PrimaryData::One(resource) => std::slice::from_mut(resource),
            PrimaryData::Many(resources) => resources,
        }
    }

    /// Whether there are no primary resources (`None` or an empty array)
    pub fn is_empty(&self) -> bool {
        self.resources().is_empty()
    }
}

/// The `jsonapi` member describing the implementation's format version
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonApiObject {
    /// Highest format version supported
    #[serde(default)]
    pub version: String,

    /// Non-standard meta information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl JsonApiObject {
    /// A version object for the given version string
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            meta: None,
        }
    }

    /// A version object for the format version this crate implements
    pub fn current() -> Self {
        Self::new(crate::constants::JSONAPI_VERSION)
    }
}

/// Links member of an error object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorLinks {
    /// Link to further details about this occurrence of the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<LinkValue>,
}

/// References to the source of an error
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON Pointer to the offending value in the request document
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pointer: String,

    /// Query parameter that caused the error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parameter: String,

    /// Request header that caused the error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub header: String,
}

/// An error object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Unique identifier for this occurrence of the problem
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Error links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ErrorLinks>,

    /// HTTP status code, as a string
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,

    /// Application-specific error code
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,

    /// Short, human-readable summary
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Human-readable explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,

    /// Source of the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,

    /// Non-standard meta information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ErrorObject {
    /// Create an error object with a status and a title
    pub fn new(status: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// A JSON:API document
///
/// Used both as the top-level envelope and as the value of a relationship.
/// Encoding and decoding live in [`crate::encoder`] and [`crate::decoder`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Primary data
    pub data: PrimaryData,

    /// Non-standard meta information
    pub meta: Option<Value>,

    /// Format version object
    pub jsonapi: Option<JsonApiObject>,

    /// Error objects; when non-empty, `data` is not encoded
    pub errors: Vec<ErrorObject>,

    /// Top-level links
    pub links: Option<Link>,

    /// Included resources forming a compound document
    pub included: Vec<ResourceObject>,
}

impl Document {
    /// Create an empty document with no primary data
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose primary data is a single resource
    pub fn one(resource: ResourceObject) -> Self {
        Self {
            data: PrimaryData::One(resource),
            ..Self::default()
        }
    }

    /// A document whose primary data is an array of resources
    pub fn many(resources: Vec<ResourceObject>) -> Self {
        Self {
            data: PrimaryData::Many(resources),
            ..Self::default()
        }
    }

    /// A document carrying only errors
    pub fn from_errors(errors: Vec<ErrorObject>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Add included resources
    pub fn with_included(mut self, included: Vec<ResourceObject>) -> Self {
        self.included.extend(included);
        self
    }

    /// Set top-level meta information
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Set top-level links
    pub fn with_links(mut self, links: Link) -> Self {
        self.links = Some(links);
        self
    }

    /// The shape of the primary data
    pub fn shape(&self) -> DataShape {
        self.data.shape()
    }

    /// Primary resources as a slice, regardless of shape
    pub fn primary_resources(&self) -> &[ResourceObject] {
        self.data.resources()
    }

    /// Whether there is no primary data (null or an empty array)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether this document carries error objects
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_display() {
        let identity = ResourceIdentity::new("articles", "1");
        assert_eq!(identity.to_string(), "{Type: articles, ID: 1}");
    }

    #[test]
    fn test_primary_data_resources() {
        assert!(PrimaryData::None.resources().is_empty());
        assert!(PrimaryData::Many(Vec::new()).is_empty());

        let one = PrimaryData::One(ResourceObject::new("a", "1"));
        assert_eq!(one.shape(), DataShape::One);
        assert_eq!(one.resources().len(), 1);
        assert_eq!(one.resources()[0].identity(), ResourceIdentity::new("a", "1"));
    }

    #[test]
    fn test_identifier_drops_body() {
        let resource = ResourceObject::new("people", "9")
            .with_attribute("name", "Dan")
            .with_meta(json!({"k": 1}));

        let thin = resource.identifier();
        assert_eq!(thin.identity(), resource.identity());
        assert!(thin.attributes.is_empty());
        assert!(thin.meta.is_none());
    }
}
