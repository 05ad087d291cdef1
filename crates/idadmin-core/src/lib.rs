//! ## Crate layout
//! - `property`: descriptors, typed bindings, catalogs, and batch validation.
//! - `metadata`: per-entity-kind catalog aggregation and presentation views.
//! - `model`: wire models for summaries, details, and child-collection values.
//! - `result`: operation result envelopes shared by every service seam.
//! - `service`: the seams consumed by the (external) controller layer.
//!
//! The `prelude` module mirrors the surface a hosting service needs to wire
//! one store implementation against the three admin service traits.

pub mod error;
pub mod messages;
pub mod metadata;
pub mod model;
pub mod property;
pub mod result;
pub mod service;

/// Default page size for query operations when the caller gives none.
pub const DEFAULT_QUERY_COUNT: usize = 100;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::ConfigError,
        messages,
        metadata::{EntityMetadata, MetadataView, PropertyRef},
        model::{api_resource::*, client::*, identity_resource::*},
        property::{
            Binding, Converted, DataType, PropertyCatalog, PropertyDescriptor, PropertyShape,
            PropertyValue,
        },
        result::{AdminError, AdminResult, CreateResult, QueryResult},
        service::{ApiResourceService, ClientService, IdentityResourceService},
    };
}
