//! Vec-backed reference store for the admin service seams.
//!
//! Suitable for test hosts and demos: one record collection per entity
//! kind, numeric subjects, no persistence. The service constructors build
//! and validate their metadata eagerly, so a misregistered catalog fails at
//! wiring time rather than mid-request.

pub mod record;
pub mod seed;
pub mod service;

pub use record::{api_resource::ApiResource, client::Client, identity_resource::IdentityResource};
pub use service::{
    api_resource::InMemoryApiResourceService, client::InMemoryClientService,
    identity_resource::InMemoryIdentityResourceService,
};
