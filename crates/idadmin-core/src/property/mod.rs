//! Property metadata: typed descriptors, catalogs, and batch validation.
//!
//! A descriptor binds one wire-visible property name to one field of a
//! backing entity through a compile-time-checked accessor/mutator pair.
//! Catalogs collect descriptors per operation (create or update) and drive
//! both validation and presentation.

pub mod catalog;
pub mod descriptor;

#[cfg(test)]
mod tests;

pub use catalog::PropertyCatalog;
pub use descriptor::{Binding, PropertyDescriptor};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// DataType
///
/// Rendering tag exposed to the presentation layer. Conversion is governed
/// by the descriptor's binding; `Url`, `Password`, and `Enum` are text
/// bindings with a different rendering hint.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    String,
    Boolean,
    Integer,
    DateTime,
    Url,
    Password,
    Enum,
}

///
/// PropertyValue
///
/// Raw, untyped (name, value) pair exchanged with callers. Always validated
/// against a descriptor before being trusted.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(rename = "type")]
    pub ty: String,

    pub value: Option<String>,
}

impl PropertyValue {
    #[must_use]
    pub fn new(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            value: Some(value.into()),
        }
    }

    /// A pair whose value is absent (distinct from empty).
    #[must_use]
    pub fn unset(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            value: None,
        }
    }
}

///
/// Converted
///
/// Display-typed view of a raw wire value, used on read paths after the
/// value has already been validated (or came from the backing store).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Converted {
    Text(String),
    Flag(bool),
    Number(i64),
    Timestamp(Option<OffsetDateTime>),
}

///
/// PropertyShape
///
/// The explicit registration table that replaces runtime reflection: each
/// backing entity declares its full descriptor list once, in field
/// declaration order. Identifier and collection fields are simply not
/// registered.
///

pub trait PropertyShape: Sized {
    fn properties() -> Vec<PropertyDescriptor<Self>>;
}
