use crate::{
    record::{
        IdSequence, Rows,
        api_resource::{
            ApiResource, ApiResourceClaim, ApiResourceScope, ApiResourceScopeClaim,
            ApiResourceSecret,
        },
    },
    service::{matches, missing_required, page, parse_subject, require_subject},
};
use idadmin_core::prelude::*;
use time::OffsetDateTime;

///
/// InMemoryApiResourceService
///

pub struct InMemoryApiResourceService {
    metadata: EntityMetadata<ApiResource>,
    resources: Vec<ApiResource>,
    subjects: IdSequence,
}

impl InMemoryApiResourceService {
    pub fn new(resources: Vec<ApiResource>) -> Result<Self, ConfigError> {
        let create = PropertyCatalog::new(vec![
            PropertyDescriptor::text(
                "ApiResourceName",
                |r: &ApiResource| r.name.clone(),
                |r, v| r.name = v,
            )
            .required(),
        ]);

        let metadata =
            EntityMetadata::new("api resource", create, PropertyCatalog::from_shape()).validated()?;
        let subjects = IdSequence::after(&resources, |resource| resource.id);

        Ok(Self {
            metadata,
            resources,
            subjects,
        })
    }

    fn find_mut(resources: &mut [ApiResource], id: u32) -> Option<&mut ApiResource> {
        resources.iter_mut().find(|resource| resource.id == id)
    }

    fn require_mut(&mut self, subject: &str) -> AdminResult<&mut ApiResource> {
        let id = require_subject(subject)?;

        Self::find_mut(&mut self.resources, id).ok_or_else(AdminError::invalid_subject)
    }
}

impl ApiResourceService for InMemoryApiResourceService {
    fn metadata(&self) -> MetadataView {
        self.metadata.view()
    }

    fn query(
        &self,
        filter: Option<&str>,
        start: usize,
        count: usize,
    ) -> AdminResult<QueryResult<ApiResourceSummary>> {
        let mut rows: Vec<&ApiResource> = self
            .resources
            .iter()
            .filter(|resource| matches(filter, &[&resource.name]))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(page(
            rows.into_iter().map(ApiResource::summary).collect(),
            filter,
            start,
            count,
        ))
    }

    fn get(&self, subject: &str) -> AdminResult<Option<ApiResourceDetail>> {
        let Some(id) = parse_subject(subject) else {
            return Ok(None);
        };

        Ok(self
            .resources
            .iter()
            .find(|resource| resource.id == id)
            .map(|resource| resource.detail(self.metadata.update())))
    }

    fn create(&mut self, properties: Option<Vec<PropertyValue>>) -> AdminResult<CreateResult> {
        if !self.metadata.supports_create() {
            return Err(AdminError::NotSupported);
        }
        let Some(bag) = properties else {
            return Err(AdminError::validation(messages::data_required(
                self.metadata.entity(),
            )));
        };

        let mut errors = self.metadata.create().validate_batch(&bag);
        errors.extend(missing_required(self.metadata.create(), &bag));
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let id = self.subjects.take();
        let mut resource = ApiResource::new(id);
        for entry in &bag {
            self.metadata
                .create()
                .apply(&mut resource, &entry.ty, entry.value.as_deref())?;
        }

        tracing::info!(subject = id, name = %resource.name, "api resource created");
        self.resources.push(resource);

        Ok(CreateResult {
            subject: id.to_string(),
        })
    }

    fn delete(&mut self, subject: &str) -> AdminResult<()> {
        if !self.metadata.supports_delete() {
            return Err(AdminError::NotSupported);
        }
        let id = require_subject(subject)?;

        let before = self.resources.len();
        self.resources.retain(|resource| resource.id != id);
        if self.resources.len() == before {
            return Err(AdminError::invalid_subject());
        }

        tracing::info!(subject = id, "api resource deleted");

        Ok(())
    }

    fn set_property(&mut self, subject: &str, ty: &str, value: Option<&str>) -> AdminResult<()> {
        let id = require_subject(subject)?;

        let errors = self.metadata.update().validate_single(ty, value);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let Self {
            metadata,
            resources,
            ..
        } = self;
        let resource = Self::find_mut(resources, id).ok_or_else(AdminError::invalid_subject)?;

        tracing::debug!(subject = id, property = ty, "api resource property set");

        metadata.update().apply(resource, ty, value)
    }

    fn add_claim(&mut self, subject: &str, ty: &str) -> AdminResult<()> {
        let resource = self.require_mut(subject)?;

        if !resource.claims.iter().any(|claim| claim.ty == ty) {
            resource.claims.add(|id| ApiResourceClaim {
                id,
                ty: ty.to_string(),
            });
        }

        Ok(())
    }

    fn remove_claim(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let resource = self.require_mut(subject)?;

        resource.claims.retain(|claim| claim.id != row);

        Ok(())
    }

    fn add_secret(
        &mut self,
        subject: &str,
        ty: &str,
        value: &str,
        description: &str,
        expiration: Option<OffsetDateTime>,
    ) -> AdminResult<()> {
        let resource = self.require_mut(subject)?;

        // idempotent on (type, value)
        if !resource
            .secrets
            .iter()
            .any(|secret| secret.ty == ty && secret.value == value)
        {
            resource.secrets.add(|id| ApiResourceSecret {
                id,
                ty: ty.to_string(),
                value: value.to_string(),
                description: description.to_string(),
                expiration,
            });
        }

        Ok(())
    }

    fn update_secret(
        &mut self,
        subject: &str,
        secret_subject: &str,
        ty: &str,
        value: &str,
        description: &str,
        expiration: Option<OffsetDateTime>,
    ) -> AdminResult<()> {
        let row = require_subject(secret_subject)?;
        let resource = self.require_mut(subject)?;

        let secret = resource
            .secrets
            .iter_mut()
            .find(|secret| secret.id == row)
            .ok_or_else(|| AdminError::validation(messages::NOT_FOUND))?;

        secret.ty = ty.to_string();
        secret.value = value.to_string();
        secret.description = description.to_string();
        // an absent expiration keeps the stored one
        if expiration.is_some() {
            secret.expiration = expiration;
        }

        Ok(())
    }

    fn remove_secret(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let resource = self.require_mut(subject)?;

        resource.secrets.retain(|secret| secret.id != row);

        Ok(())
    }

    fn add_scope(&mut self, subject: &str, name: &str) -> AdminResult<()> {
        let resource = self.require_mut(subject)?;

        if !resource.scopes.iter().any(|scope| scope.name == name) {
            resource.scopes.add(|id| ApiResourceScope {
                id,
                name: name.to_string(),
                description: String::new(),
                emphasize: false,
                required: false,
                show_in_discovery_document: true,
                claims: Rows::new(),
            });
        }

        Ok(())
    }

    fn update_scope(
        &mut self,
        subject: &str,
        scope_subject: &str,
        name: &str,
        description: &str,
        emphasize: bool,
        required: bool,
        show_in_discovery_document: bool,
    ) -> AdminResult<()> {
        let row = require_subject(scope_subject)?;
        let resource = self.require_mut(subject)?;

        let scope = resource
            .scopes
            .iter_mut()
            .find(|scope| scope.id == row)
            .ok_or_else(|| AdminError::validation(messages::NOT_FOUND))?;

        scope.name = name.to_string();
        scope.description = description.to_string();
        scope.emphasize = emphasize;
        scope.required = required;
        scope.show_in_discovery_document = show_in_discovery_document;

        Ok(())
    }

    fn remove_scope(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let resource = self.require_mut(subject)?;

        resource.scopes.retain(|scope| scope.id != row);

        Ok(())
    }

    fn add_scope_claim(&mut self, subject: &str, scope_id: &str, ty: &str) -> AdminResult<()> {
        let row = require_subject(scope_id)?;
        let resource = self.require_mut(subject)?;

        let scope = resource
            .scopes
            .iter_mut()
            .find(|scope| scope.id == row)
            .ok_or_else(AdminError::invalid_subject)?;

        if scope.claims.iter().any(|claim| claim.ty == ty) {
            return Err(AdminError::validation(messages::DUPLICATE_SCOPE_CLAIM));
        }

        scope.claims.add(|id| ApiResourceScopeClaim {
            id,
            ty: ty.to_string(),
        });

        Ok(())
    }

    fn remove_scope_claim(
        &mut self,
        subject: &str,
        scope_id: &str,
        claim_id: &str,
    ) -> AdminResult<()> {
        let scope_row = require_subject(scope_id)?;
        let claim_row = require_subject(claim_id)?;
        let resource = self.require_mut(subject)?;

        let scope = resource
            .scopes
            .iter_mut()
            .find(|scope| scope.id == scope_row)
            .ok_or_else(AdminError::invalid_subject)?;

        scope.claims.retain(|claim| claim.id != claim_row);

        Ok(())
    }
}
