use crate::{
    record::{
        IdSequence,
        client::{
            Client, ClientClaim, ClientCorsOrigin, ClientCustomGrantType, ClientIdpRestriction,
            ClientPostLogoutRedirectUri, ClientRedirectUri, ClientScope, ClientSecret,
        },
    },
    service::{matches, missing_required, page, parse_subject, require_subject},
};
use idadmin_core::prelude::*;

///
/// InMemoryClientService
///
/// Vec-backed implementation of [`ClientService`]. Metadata is built and
/// validated in the constructor; a construction error is a wiring defect in
/// the hosting service.
///

pub struct InMemoryClientService {
    metadata: EntityMetadata<Client>,
    clients: Vec<Client>,
    subjects: IdSequence,
}

impl InMemoryClientService {
    pub fn new(clients: Vec<Client>) -> Result<Self, ConfigError> {
        let create = PropertyCatalog::new(vec![
            PropertyDescriptor::text(
                "ClientName",
                |c: &Client| c.client_name.clone(),
                |c, v| c.client_name = v,
            )
            .required(),
            PropertyDescriptor::text(
                "ClientId",
                |c: &Client| c.client_id.clone(),
                |c, v| c.client_id = v,
            )
            .required(),
        ]);

        let metadata =
            EntityMetadata::new("client", create, PropertyCatalog::from_shape()).validated()?;
        let subjects = IdSequence::after(&clients, |client| client.id);

        Ok(Self {
            metadata,
            clients,
            subjects,
        })
    }

    fn find_mut(clients: &mut [Client], id: u32) -> Option<&mut Client> {
        clients.iter_mut().find(|client| client.id == id)
    }

    /// Resolve a mutation subject or report it as invalid.
    fn require_mut(&mut self, subject: &str) -> AdminResult<&mut Client> {
        let id = require_subject(subject)?;

        Self::find_mut(&mut self.clients, id).ok_or_else(AdminError::invalid_subject)
    }
}

impl ClientService for InMemoryClientService {
    fn metadata(&self) -> MetadataView {
        self.metadata.view()
    }

    fn query(
        &self,
        filter: Option<&str>,
        start: usize,
        count: usize,
    ) -> AdminResult<QueryResult<ClientSummary>> {
        let mut rows: Vec<&Client> = self
            .clients
            .iter()
            .filter(|client| matches(filter, &[&client.client_name, &client.client_id]))
            .collect();
        rows.sort_by(|a, b| a.client_name.cmp(&b.client_name));

        Ok(page(
            rows.into_iter().map(Client::summary).collect(),
            filter,
            start,
            count,
        ))
    }

    fn get(&self, subject: &str) -> AdminResult<Option<ClientDetail>> {
        let Some(id) = parse_subject(subject) else {
            return Ok(None);
        };

        Ok(self
            .clients
            .iter()
            .find(|client| client.id == id)
            .map(|client| client.detail(self.metadata.update())))
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
        let mut client = Client::new(id);
        for entry in &bag {
            self.metadata
                .create()
                .apply(&mut client, &entry.ty, entry.value.as_deref())?;
        }

        tracing::info!(subject = id, client_id = %client.client_id, "client created");
        self.clients.push(client);

        Ok(CreateResult {
            subject: id.to_string(),
        })
    }

    fn delete(&mut self, subject: &str) -> AdminResult<()> {
        if !self.metadata.supports_delete() {
            return Err(AdminError::NotSupported);
        }
        let id = require_subject(subject)?;

        let before = self.clients.len();
        self.clients.retain(|client| client.id != id);
        if self.clients.len() == before {
            return Err(AdminError::invalid_subject());
        }

        tracing::info!(subject = id, "client deleted");

        Ok(())
    }

    fn set_property(&mut self, subject: &str, ty: &str, value: Option<&str>) -> AdminResult<()> {
        let id = require_subject(subject)?;

        let errors = self.metadata.update().validate_single(ty, value);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let Self {
            metadata, clients, ..
        } = self;
        let client = Self::find_mut(clients, id).ok_or_else(AdminError::invalid_subject)?;

        tracing::debug!(subject = id, property = ty, "client property set");

        metadata.update().apply(client, ty, value)
    }

    fn add_claim(&mut self, subject: &str, ty: &str, value: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        // idempotent on (type, value)
        if !client
            .claims
            .iter()
            .any(|claim| claim.ty == ty && claim.value == value)
        {
            client.claims.add(|id| ClientClaim {
                id,
                ty: ty.to_string(),
                value: value.to_string(),
            });
        }

        Ok(())
    }

    fn remove_claim(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.claims.retain(|claim| claim.id != row);

        Ok(())
    }

    fn add_secret(&mut self, subject: &str, ty: &str, value: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client
            .secrets
            .iter()
            .any(|secret| secret.ty == ty && secret.value == value)
        {
            client.secrets.add(|id| ClientSecret {
                id,
                ty: ty.to_string(),
                value: value.to_string(),
            });
        }

        Ok(())
    }

    fn remove_secret(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.secrets.retain(|secret| secret.id != row);

        Ok(())
    }

    fn add_idp_restriction(&mut self, subject: &str, provider: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client
            .idp_restrictions
            .iter()
            .any(|idp| idp.provider == provider)
        {
            client.idp_restrictions.add(|id| ClientIdpRestriction {
                id,
                provider: provider.to_string(),
            });
        }

        Ok(())
    }

    fn remove_idp_restriction(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.idp_restrictions.retain(|idp| idp.id != row);

        Ok(())
    }

    fn add_post_logout_redirect_uri(&mut self, subject: &str, uri: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client
            .post_logout_redirect_uris
            .iter()
            .any(|entry| entry.uri == uri)
        {
            client
                .post_logout_redirect_uris
                .add(|id| ClientPostLogoutRedirectUri {
                    id,
                    uri: uri.to_string(),
                });
        }

        Ok(())
    }

    fn remove_post_logout_redirect_uri(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.post_logout_redirect_uris.retain(|entry| entry.id != row);

        Ok(())
    }

    fn add_redirect_uri(&mut self, subject: &str, uri: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client.redirect_uris.iter().any(|entry| entry.uri == uri) {
            client.redirect_uris.add(|id| ClientRedirectUri {
                id,
                uri: uri.to_string(),
            });
        }

        Ok(())
    }

    fn remove_redirect_uri(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.redirect_uris.retain(|entry| entry.id != row);

        Ok(())
    }

    fn add_cors_origin(&mut self, subject: &str, origin: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client.cors_origins.iter().any(|entry| entry.origin == origin) {
            client.cors_origins.add(|id| ClientCorsOrigin {
                id,
                origin: origin.to_string(),
            });
        }

        Ok(())
    }

    fn remove_cors_origin(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.cors_origins.retain(|entry| entry.id != row);

        Ok(())
    }

    fn add_custom_grant_type(&mut self, subject: &str, grant_type: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client
            .custom_grant_types
            .iter()
            .any(|entry| entry.grant_type == grant_type)
        {
            client.custom_grant_types.add(|id| ClientCustomGrantType {
                id,
                grant_type: grant_type.to_string(),
            });
        }

        Ok(())
    }

    fn remove_custom_grant_type(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.custom_grant_types.retain(|entry| entry.id != row);

        Ok(())
    }

    fn add_scope(&mut self, subject: &str, scope: &str) -> AdminResult<()> {
        let client = self.require_mut(subject)?;

        if !client.scopes.iter().any(|entry| entry.scope == scope) {
            client.scopes.add(|id| ClientScope {
                id,
                scope: scope.to_string(),
            });
        }

        Ok(())
    }

    fn remove_scope(&mut self, subject: &str, id: &str) -> AdminResult<()> {
        let row = require_subject(id)?;
        let client = self.require_mut(subject)?;

        client.scopes.retain(|entry| entry.id != row);

        Ok(())
    }
}
