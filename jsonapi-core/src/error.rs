//! Error types for JSON:API document operations

use crate::types::ResourceIdentity;
use std::collections::BTreeSet;
use std::fmt;

/// Errors that can occur while encoding, decoding or verifying documents
#[derive(Debug, thiserror::Error)]
pub enum JsonApiError {
    /// The document has none of the top-level members
    #[error("Document is missing required top-level member: one of data, errors, meta, jsonapi or links")]
    MissingDataField,

    /// `data` is present but is not null, a resource object or an array
    #[error("Document member \"data\" is invalid: expected null, a resource object or an array")]
    InvalidDataField,

    /// A links object has neither `self` nor `related`
    #[error("Links object requires at least one of \"self\" or \"related\"")]
    MissingLinkFields,

    /// A value had the wrong shape
    #[error(transparent)]
    Type(#[from] TypeError),

    /// Included resources are not reachable from primary data
    #[error(transparent)]
    PartialLinkage(#[from] PartialLinkageError),

    /// Identifier could not be converted to or from its wire form
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for JsonApiError {
    fn from(err: serde_json::Error) -> Self {
        JsonApiError::Serialization(err.to_string())
    }
}

/// A value did not have one of the expected types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Type error: got type {actual:?}, expected one of {expected:?}")]
pub struct TypeError {
    /// The type the value actually had.
    pub actual: String,
    /// The types that would have been accepted.
    pub expected: Vec<String>,
}

impl TypeError {
    /// Create a type error from an actual type and the accepted set
    pub fn new(actual: impl Into<String>, expected: &[&str]) -> Self {
        Self {
            actual: actual.into(),
            expected: expected.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

/// Included resources that no chain of relationships reaches from primary data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialLinkageError {
    /// Identities of the orphaned included resources (unordered).
    pub resources: BTreeSet<ResourceIdentity>,
}

impl PartialLinkageError {
    /// Whether the given identity is among the orphans
    pub fn contains(&self, identity: &ResourceIdentity) -> bool {
        self.resources.contains(identity)
    }
}

impl fmt::Display for PartialLinkageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Included resources are not linked to primary data: [")?;
        for (i, identity) in self.resources.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", identity)?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for PartialLinkageError {}

/// Failure while resolving a resource identifier
#[derive(Debug, thiserror::Error)]
pub enum IdentifierError {
    /// The identifier type offers none of the supported capabilities
    #[error(transparent)]
    Type(#[from] TypeError),

    /// The identifier's own unmarshal implementation rejected the wire string
    #[error("Identifier unmarshal failed: {0}")]
    Unmarshal(Box<dyn std::error::Error + Send + Sync>),
}

impl IdentifierError {
    /// The error returned by a custom unmarshal implementation, if any
    pub fn source_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            IdentifierError::Unmarshal(err) => Some(err.as_ref()),
            IdentifierError::Type(_) => None,
        }
    }
}
