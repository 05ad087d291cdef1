use crate::{
    record::{
        IdSequence,
        identity_resource::{IdentityResource, IdentityResourceClaim},
    },
    service::{matches, missing_required, page, parse_subject, require_subject},
};
use idadmin_core::prelude::*;

///
/// InMemoryIdentityResourceService
///

pub struct InMemoryIdentityResourceService {
    metadata: EntityMetadata<IdentityResource>,
    resources: Vec<IdentityResource>,
    subjects: IdSequence,
}

impl InMemoryIdentityResourceService {
    pub fn new(resources: Vec<IdentityResource>) -> Result<Self, ConfigError> {
        let create = PropertyCatalog::new(vec![
            PropertyDescriptor::text(
                "IdentityResourceName",
                |r: &IdentityResource| r.name.clone(),
                |r, v| r.name = v,
            )
            .required(),
        ]);

        let metadata = EntityMetadata::new("identity resource", create, PropertyCatalog::from_shape())
            .validated()?;
        let subjects = IdSequence::after(&resources, |resource| resource.id);

        Ok(Self {
            metadata,
            resources,
            subjects,
        })
    }

    fn find_mut(resources: &mut [IdentityResource], id: u32) -> Option<&mut IdentityResource> {
        resources.iter_mut().find(|resource| resource.id == id)
    }

    fn require_mut(&mut self, subject: &str) -> AdminResult<&mut IdentityResource> {
        let id = require_subject(subject)?;

        Self::find_mut(&mut self.resources, id).ok_or_else(AdminError::invalid_subject)
    }
}

impl IdentityResourceService for InMemoryIdentityResourceService {
    fn metadata(&self) -> MetadataView {
        self.metadata.view()
    }

    fn query(
        &self,
        filter: Option<&str>,
        start: usize,
        count: usize,
    ) -> AdminResult<QueryResult<IdentityResourceSummary>> {
        let mut rows: Vec<&IdentityResource> = self
            .resources
            .iter()
            .filter(|resource| matches(filter, &[&resource.name]))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(page(
            rows.into_iter().map(IdentityResource::summary).collect(),
            filter,
            start,
            count,
        ))
    }

    fn get(&self, subject: &str) -> AdminResult<Option<IdentityResourceDetail>> {
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
        let mut resource = IdentityResource::new(id);
        for entry in &bag {
            self.metadata
                .create()
                .apply(&mut resource, &entry.ty, entry.value.as_deref())?;
        }

        tracing::info!(subject = id, name = %resource.name, "identity resource created");
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

        tracing::info!(subject = id, "identity resource deleted");

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

        tracing::debug!(subject = id, property = ty, "identity resource property set");

        metadata.update().apply(resource, ty, value)
    }

    fn add_claim(&mut self, subject: &str, ty: &str) -> AdminResult<()> {
        let resource = self.require_mut(subject)?;

        if !resource.claims.iter().any(|claim| claim.ty == ty) {
            resource.claims.add(|id| IdentityResourceClaim {
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
}
