//! Service seams for the three entity kinds.
//!
//! These are the boundaries the (external) controller layer programs
//! against. Implementations own the backing store, build their
//! [`EntityMetadata`](crate::metadata::EntityMetadata) eagerly at
//! construction, and follow strict check-then-apply: a batch either applies
//! in full or not at all.

use crate::{
    metadata::MetadataView,
    model::{
        api_resource::{ApiResourceDetail, ApiResourceSummary},
        client::{ClientDetail, ClientSummary},
        identity_resource::{IdentityResourceDetail, IdentityResourceSummary},
    },
    property::PropertyValue,
    result::{AdminResult, CreateResult, QueryResult},
};
use time::OffsetDateTime;

///
/// ClientService
///

pub trait ClientService {
    fn metadata(&self) -> MetadataView;

    fn query(
        &self,
        filter: Option<&str>,
        start: usize,
        count: usize,
    ) -> AdminResult<QueryResult<ClientSummary>>;

    fn get(&self, subject: &str) -> AdminResult<Option<ClientDetail>>;

    /// `None` properties means the bag was absent from the request, which
    /// is a top-level validation error distinct from an empty bag.
    fn create(&mut self, properties: Option<Vec<PropertyValue>>) -> AdminResult<CreateResult>;

    fn delete(&mut self, subject: &str) -> AdminResult<()>;

    fn set_property(&mut self, subject: &str, ty: &str, value: Option<&str>) -> AdminResult<()>;

    fn add_claim(&mut self, subject: &str, ty: &str, value: &str) -> AdminResult<()>;
    fn remove_claim(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_secret(&mut self, subject: &str, ty: &str, value: &str) -> AdminResult<()>;
    fn remove_secret(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_idp_restriction(&mut self, subject: &str, provider: &str) -> AdminResult<()>;
    fn remove_idp_restriction(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_post_logout_redirect_uri(&mut self, subject: &str, uri: &str) -> AdminResult<()>;
    fn remove_post_logout_redirect_uri(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_redirect_uri(&mut self, subject: &str, uri: &str) -> AdminResult<()>;
    fn remove_redirect_uri(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_cors_origin(&mut self, subject: &str, origin: &str) -> AdminResult<()>;
    fn remove_cors_origin(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_custom_grant_type(&mut self, subject: &str, grant_type: &str) -> AdminResult<()>;
    fn remove_custom_grant_type(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_scope(&mut self, subject: &str, scope: &str) -> AdminResult<()>;
    fn remove_scope(&mut self, subject: &str, id: &str) -> AdminResult<()>;
}

///
/// IdentityResourceService
///

pub trait IdentityResourceService {
    fn metadata(&self) -> MetadataView;

    fn query(
        &self,
        filter: Option<&str>,
        start: usize,
        count: usize,
    ) -> AdminResult<QueryResult<IdentityResourceSummary>>;

    fn get(&self, subject: &str) -> AdminResult<Option<IdentityResourceDetail>>;

    fn create(&mut self, properties: Option<Vec<PropertyValue>>) -> AdminResult<CreateResult>;

    fn delete(&mut self, subject: &str) -> AdminResult<()>;

    fn set_property(&mut self, subject: &str, ty: &str, value: Option<&str>) -> AdminResult<()>;

    fn add_claim(&mut self, subject: &str, ty: &str) -> AdminResult<()>;
    fn remove_claim(&mut self, subject: &str, id: &str) -> AdminResult<()>;
}

///
/// ApiResourceService
///

pub trait ApiResourceService {
    fn metadata(&self) -> MetadataView;

    fn query(
        &self,
        filter: Option<&str>,
        start: usize,
        count: usize,
    ) -> AdminResult<QueryResult<ApiResourceSummary>>;

    fn get(&self, subject: &str) -> AdminResult<Option<ApiResourceDetail>>;

    fn create(&mut self, properties: Option<Vec<PropertyValue>>) -> AdminResult<CreateResult>;

    fn delete(&mut self, subject: &str) -> AdminResult<()>;

    fn set_property(&mut self, subject: &str, ty: &str, value: Option<&str>) -> AdminResult<()>;

    fn add_claim(&mut self, subject: &str, ty: &str) -> AdminResult<()>;
    fn remove_claim(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_secret(
        &mut self,
        subject: &str,
        ty: &str,
        value: &str,
        description: &str,
        expiration: Option<OffsetDateTime>,
    ) -> AdminResult<()>;

    fn update_secret(
        &mut self,
        subject: &str,
        secret_subject: &str,
        ty: &str,
        value: &str,
        description: &str,
        expiration: Option<OffsetDateTime>,
    ) -> AdminResult<()>;

    fn remove_secret(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_scope(&mut self, subject: &str, name: &str) -> AdminResult<()>;

    fn update_scope(
        &mut self,
        subject: &str,
        scope_subject: &str,
        name: &str,
        description: &str,
        emphasize: bool,
        required: bool,
        show_in_discovery_document: bool,
    ) -> AdminResult<()>;

    fn remove_scope(&mut self, subject: &str, id: &str) -> AdminResult<()>;

    fn add_scope_claim(&mut self, subject: &str, scope_id: &str, ty: &str) -> AdminResult<()>;
    fn remove_scope_claim(&mut self, subject: &str, scope_id: &str, claim_id: &str)
    -> AdminResult<()>;
}
