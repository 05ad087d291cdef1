//! Wire models for the three entity kinds: summaries for listings, details
//! for single-entity reads, and value structs for child collections.

pub mod api_resource;
pub mod client;
pub mod identity_resource;
