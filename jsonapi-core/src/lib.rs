//! # JSON:API Core
//!
//! Encoding, decoding and compound-document verification for JSON:API
//! documents.
//!
//! ## Modules
//!
//! - `constants`: Member names and the format version
//! - `types`: Core types (Document, PrimaryData, ResourceObject, ErrorObject)
//! - `links`: Links objects and link capabilities
//! - `identifier`: Resource identifier resolution
//! - `validate`: Meta and links validation
//! - `encoder`: Document encoding
//! - `decoder`: Document decoding with primary data shape detection
//! - `linker`: Full-linkage verification and relationship aliasing

#![warn(missing_docs)]

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod identifier;
pub mod linker;
pub mod links;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use decoder::decode_document;
pub use encoder::encode_document;
pub use error::{IdentifierError, JsonApiError, PartialLinkageError, TypeError};
pub use links::{Link, LinkObject, LinkValue};
pub use types::{DataShape, Document, ErrorObject, PrimaryData, ResourceIdentity, ResourceObject};

/// Result type alias for JSON:API operations
pub type Result<T> = core::result::Result<T, JsonApiError>;
