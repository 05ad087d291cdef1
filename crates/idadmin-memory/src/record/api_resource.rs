use crate::record::Rows;
use idadmin_core::prelude::*;
use time::OffsetDateTime;

///
/// ApiResource
///
/// Backing record for one protected API: its claims, shared secrets, and
/// scopes (each scope carrying its own claim list).
///

#[derive(Clone, Debug)]
pub struct ApiResource {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub enabled: bool,
    pub claims: Rows<ApiResourceClaim>,
    pub secrets: Rows<ApiResourceSecret>,
    pub scopes: Rows<ApiResourceScope>,
}

impl ApiResource {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            display_name: String::new(),
            description: String::new(),
            enabled: true,
            claims: Rows::new(),
            secrets: Rows::new(),
            scopes: Rows::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> ApiResourceSummary {
        ApiResourceSummary {
            subject: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    #[must_use]
    pub fn detail(&self, update: &PropertyCatalog<Self>) -> ApiResourceDetail {
        ApiResourceDetail {
            subject: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            resource_claims: self
                .claims
                .iter()
                .map(|claim| ApiResourceClaimValue {
                    id: claim.id.to_string(),
                    ty: claim.ty.clone(),
                })
                .collect(),
            resource_scopes: self
                .scopes
                .iter()
                .map(|scope| ApiResourceScopeValue {
                    id: scope.id.to_string(),
                    name: scope.name.clone(),
                    description: scope.description.clone(),
                    emphasize: scope.emphasize,
                    required: scope.required,
                    show_in_discovery_document: scope.show_in_discovery_document,
                    claims: scope
                        .claims
                        .iter()
                        .map(|claim| ApiResourceScopeClaimValue {
                            id: claim.id.to_string(),
                            ty: claim.ty.clone(),
                        })
                        .collect(),
                })
                .collect(),
            resource_secrets: self
                .secrets
                .iter()
                .map(|secret| ApiResourceSecretValue {
                    id: secret.id.to_string(),
                    ty: secret.ty.clone(),
                    value: secret.value.clone(),
                    description: secret.description.clone(),
                    expiration: secret.expiration,
                })
                .collect(),
            properties: update
                .iter()
                .map(|prop| PropertyValue::new(prop.ty(), prop.try_get(self)))
                .collect(),
        }
    }
}

impl PropertyShape for ApiResource {
    fn properties() -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor::text(
                "ApiResourceName",
                |r: &Self| r.name.clone(),
                |r, v| r.name = v,
            )
            .required(),
            PropertyDescriptor::text(
                "DisplayName",
                |r: &Self| r.display_name.clone(),
                |r, v| r.display_name = v,
            ),
            PropertyDescriptor::text(
                "Description",
                |r: &Self| r.description.clone(),
                |r, v| r.description = v,
            ),
            PropertyDescriptor::flag("Enabled", |r: &Self| r.enabled, |r, v| r.enabled = v),
        ]
    }
}

///
/// Child rows
///

#[derive(Clone, Debug)]
pub struct ApiResourceClaim {
    pub id: u32,
    pub ty: String,
}

#[derive(Clone, Debug)]
pub struct ApiResourceSecret {
    pub id: u32,
    pub ty: String,
    pub value: String,
    pub description: String,
    pub expiration: Option<OffsetDateTime>,
}

#[derive(Clone, Debug)]
pub struct ApiResourceScope {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub emphasize: bool,
    pub required: bool,
    pub show_in_discovery_document: bool,
    pub claims: Rows<ApiResourceScopeClaim>,
}

#[derive(Clone, Debug)]
pub struct ApiResourceScopeClaim {
    pub id: u32,
    pub ty: String,
}
