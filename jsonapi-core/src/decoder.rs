//! Document decoding
//!
//! `data` can be absent, `null`, an object or an array, so it cannot be
//! decoded straight into one typed slot. Decoding first parses the
//! document into an untyped member map and sniffs the shape of `data`,
//! then converts `data` and the fixed members into their typed form.

use crate::constants::DATA;
use crate::error::JsonApiError;
use crate::links::Link;
use crate::types::{DataShape, Document, ErrorObject, JsonApiObject, PrimaryData, ResourceObject};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

#[cfg(feature = "logging")]
use tracing::debug;

/// Decode a document from JSON bytes
///
/// Returns:
/// - `MissingDataField` for a document with no members (`{}`)
/// - `InvalidDataField` when `data` is an empty object or a scalar
/// - `Serialization` for malformed JSON or members of the wrong type
pub fn decode_document(bytes: &[u8]) -> Result<Document, JsonApiError> {
    let members: Map<String, Value> = serde_json::from_slice(bytes)?;
    decode_members(members)
}

/// Decode a document from a JSON string
pub fn decode_document_str(input: &str) -> Result<Document, JsonApiError> {
    decode_document(input.as_bytes())
}

/// Determine the primary data shape from the untyped member map
pub fn sniff_shape(members: &Map<String, Value>) -> Result<DataShape, JsonApiError> {
    if members.is_empty() {
        return Err(JsonApiError::MissingDataField);
    }

    match members.get(DATA) {
        None | Some(Value::Null) => Ok(DataShape::None),
        Some(Value::Object(object)) if object.is_empty() => Err(JsonApiError::InvalidDataField),
        Some(Value::Object(_)) => Ok(DataShape::One),
        Some(Value::Array(_)) => Ok(DataShape::Many),
        Some(_) => Err(JsonApiError::InvalidDataField),
    }
}

/// Fixed top-level members, decoded after `data` has been taken out
#[derive(Deserialize)]
struct DocumentMembers {
    #[serde(default)]
    meta: Option<Value>,

    #[serde(default)]
    jsonapi: Option<JsonApiObject>,

    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<ErrorObject>,

    #[serde(default)]
    links: Option<Link>,

    #[serde(default, deserialize_with = "null_as_default")]
    included: Vec<ResourceObject>,
}

fn decode_members(mut members: Map<String, Value>) -> Result<Document, JsonApiError> {
    let shape = sniff_shape(&members)?;

    #[cfg(feature = "logging")]
    debug!("Primary data shape: {:?}", shape);

    let data = match (shape, members.remove(DATA)) {
        (DataShape::One, Some(value)) => PrimaryData::One(serde_json::from_value(value)?),
        (DataShape::Many, Some(value)) => PrimaryData::Many(serde_json::from_value(value)?),
        _ => PrimaryData::None,
    };

    let fixed: DocumentMembers = serde_json::from_value(Value::Object(members))?;

    #[cfg(feature = "logging")]
    debug!(
        "Decoded document: {} primary, {} included, {} errors",
        data.resources().len(),
        fixed.included.len(),
        fixed.errors.len()
    );

    Ok(Document {
        data,
        meta: fixed.meta,
        jsonapi: fixed.jsonapi,
        errors: fixed.errors,
        links: fixed.links,
        included: fixed.included,
    })
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let members = Map::<String, Value>::deserialize(deserializer)?;
        decode_members(members).map_err(de::Error::custom)
    }
}

/// Deserialize a member that treats `null` like an absent value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
