//! Member names and format constants

/// Format version written by `jsonapi` objects this crate creates
pub const JSONAPI_VERSION: &str = "1.1";

/// Primary data member
pub const DATA: &str = "data";

/// Meta member
pub const META: &str = "meta";

/// Format version object member
pub const JSONAPI: &str = "jsonapi";

/// Error objects member
pub const ERRORS: &str = "errors";

/// Links member
pub const LINKS: &str = "links";

/// Included resources member
pub const INCLUDED: &str = "included";
