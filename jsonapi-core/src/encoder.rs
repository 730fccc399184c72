//! Document encoding
//!
//! The `data` member is written according to the document's own
//! [`PrimaryData`] variant:
//! 1. errors present: `data` is omitted entirely
//! 2. `Many`: `data` is an array, possibly empty
//! 3. otherwise: `data` is the single resource, or `null`
//!
//! `meta`, `jsonapi`, `errors`, `links` and `included` are omitted when empty.

use crate::constants::{DATA, ERRORS, INCLUDED, JSONAPI, LINKS, META};
use crate::error::JsonApiError;
use crate::types::{Document, PrimaryData, ResourceObject};
use bytes::Bytes;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a document into compact JSON bytes
pub fn encode_document(document: &Document) -> Result<Bytes, JsonApiError> {
    let encoded = serde_json::to_vec(document)?;

    #[cfg(feature = "logging")]
    debug!(
        "Encoded document ({:?} primary data, {} included) into {} bytes",
        document.shape(),
        document.included.len(),
        encoded.len()
    );

    Ok(Bytes::from(encoded))
}

/// Encode a document into indented JSON bytes
pub fn encode_document_pretty(document: &Document) -> Result<Bytes, JsonApiError> {
    Ok(Bytes::from(serde_json::to_vec_pretty(document)?))
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        if self.errors.is_empty() {
            match &self.data {
                PrimaryData::None => map.serialize_entry(DATA, &None::<ResourceObject>)?,
                PrimaryData::One(resource) => map.serialize_entry(DATA, resource)?,
                PrimaryData::Many(resources) => map.serialize_entry(DATA, resources)?,
            }
        }

        if let Some(meta) = &self.meta {
            map.serialize_entry(META, meta)?;
        }
        if let Some(jsonapi) = &self.jsonapi {
            map.serialize_entry(JSONAPI, jsonapi)?;
        }
        if !self.errors.is_empty() {
            map.serialize_entry(ERRORS, &self.errors)?;
        }
        if let Some(links) = &self.links {
            map.serialize_entry(LINKS, links)?;
        }
        if !self.included.is_empty() {
            map.serialize_entry(INCLUDED, &self.included)?;
        }

        map.end()
    }
}
