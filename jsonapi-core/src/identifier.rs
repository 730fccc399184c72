//! Resource identifier resolution
//!
//! A resource's key does not have to be a string. Key types describe which
//! conversions they support by implementing [`Identifier`], and the
//! resolver functions try those conversions in a fixed order.
//!
//! Marshaling a key to its wire string:
//!
//! 1. [`MarshalIdentifier`], if the type exposes it
//! 2. the value itself, if it is a `String` or `&'static str`
//! 3. [`fmt::Display`], if the type exposes it
//! 4. otherwise a [`TypeError`]
//!
//! Unmarshaling a wire string into a key:
//!
//! 1. [`UnmarshalIdentifier`], if the type exposes it; its error is returned as is
//! 2. direct assignment, if the target is a `String`
//! 3. otherwise a [`TypeError`]

use crate::error::{IdentifierError, TypeError};
use std::any::Any;
use std::error::Error;
use std::fmt;

/// Boxed error returned by custom identifier unmarshaling
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Custom conversion of a key to its wire string
pub trait MarshalIdentifier {
    /// The wire form of this identifier
    fn marshal_id(&self) -> String;
}

/// Custom conversion of a wire string into a key
pub trait UnmarshalIdentifier {
    /// Populate this identifier from its wire form
    fn unmarshal_id(&mut self, id: &str) -> Result<(), BoxError>;
}

/// Capabilities a key type offers to the resolver
///
/// Every method defaults to "not supported"; implementors override the
/// ones their type provides.
pub trait Identifier: Any {
    /// Custom marshaling capability
    fn as_marshal(&self) -> Option<&dyn MarshalIdentifier> {
        None
    }

    /// Display capability, used when no custom marshaling exists
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Custom unmarshaling capability
    fn as_unmarshal(&mut self) -> Option<&mut dyn UnmarshalIdentifier> {
        None
    }

    /// Type name reported in type errors
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Identifier for String {}

impl Identifier for &'static str {}

macro_rules! impl_integer_identifier {
    ($($t:ty),*) => {
        $(
            impl Identifier for $t {
                fn as_display(&self) -> Option<&dyn fmt::Display> {
                    Some(self)
                }

                fn as_unmarshal(&mut self) -> Option<&mut dyn UnmarshalIdentifier> {
                    Some(self)
                }
            }

            impl UnmarshalIdentifier for $t {
                fn unmarshal_id(&mut self, id: &str) -> Result<(), BoxError> {
                    *self = id.parse::<$t>()?;
                    Ok(())
                }
            }
        )*
    };
}

impl_integer_identifier!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Resolve the wire string for an identifier
pub fn marshal_identifier<T: Identifier>(value: &T) -> Result<String, IdentifierError> {
    if let Some(marshal) = value.as_marshal() {
        return Ok(marshal.marshal_id());
    }

    let any = value as &dyn Any;
    if let Some(s) = any.downcast_ref::<String>() {
        return Ok(s.clone());
    }
    if let Some(s) = any.downcast_ref::<&'static str>() {
        return Ok((*s).to_string());
    }

    if let Some(display) = value.as_display() {
        return Ok(display.to_string());
    }

    Err(TypeError::new(
        value.type_name(),
        &["MarshalIdentifier", "string", "Display"],
    )
    .into())
}

/// Populate an identifier from its wire string
pub fn unmarshal_identifier<T: Identifier>(target: &mut T, id: &str) -> Result<(), IdentifierError> {
    if let Some(unmarshal) = target.as_unmarshal() {
        return unmarshal.unmarshal_id(id).map_err(IdentifierError::Unmarshal);
    }

    let type_name = target.type_name();
    let any = target as &mut dyn Any;
    if let Some(slot) = any.downcast_mut::<String>() {
        *slot = id.to_string();
        return Ok(());
    }

    Err(TypeError::new(type_name, &["UnmarshalIdentifier", "string"]).into())
}
