//! Canonical user-facing validation messages.
//!
//! Controllers surface these verbatim, so the wording is part of the
//! contract. Change with care.

/// Single-property set call arrived without a property type.
pub const PROPERTY_TYPE_REQUIRED: &str = "property type is required";

/// The caller-supplied subject does not resolve to an entity.
pub const INVALID_SUBJECT: &str = "Invalid subject";

/// A child object referenced by subject does not exist.
pub const NOT_FOUND: &str = "Not found";

/// The scope already carries a claim of the given type.
pub const DUPLICATE_SCOPE_CLAIM: &str = "Duplicate scope claim";

/// A required property was missing or empty.
#[must_use]
pub fn property_required(ty: &str) -> String {
    format!("{ty} is required.")
}

/// A supplied value could not be parsed for the property's data type.
#[must_use]
pub fn property_not_valid(ty: &str) -> String {
    format!("{ty} is not valid.")
}

/// The supplied wire type matches no descriptor in the catalog.
#[must_use]
pub fn property_invalid(ty: &str) -> String {
    format!("{ty} is invalid")
}

/// The operation mandates a property bag and none was supplied.
#[must_use]
pub fn data_required(entity: &str) -> String {
    format!("{entity} data is required")
}
