use crate::record::Rows;
use idadmin_core::prelude::*;

///
/// IdentityResource
///
/// Backing record for one identity resource (a named bundle of user claims
/// a client may request).
///

#[derive(Clone, Debug)]
pub struct IdentityResource {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub enabled: bool,
    pub emphasize: bool,
    pub required: bool,
    pub show_in_discovery_document: bool,
    pub claims: Rows<IdentityResourceClaim>,
}

impl IdentityResource {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            display_name: String::new(),
            description: String::new(),
            enabled: true,
            emphasize: false,
            required: false,
            show_in_discovery_document: true,
            claims: Rows::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> IdentityResourceSummary {
        IdentityResourceSummary {
            subject: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    #[must_use]
    pub fn detail(&self, update: &PropertyCatalog<Self>) -> IdentityResourceDetail {
        IdentityResourceDetail {
            subject: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            claims: self
                .claims
                .iter()
                .map(|claim| IdentityResourceClaimValue {
                    id: claim.id.to_string(),
                    ty: claim.ty.clone(),
                })
                .collect(),
            properties: update
                .iter()
                .map(|prop| PropertyValue::new(prop.ty(), prop.try_get(self)))
                .collect(),
        }
    }
}

impl PropertyShape for IdentityResource {
    fn properties() -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor::text(
                "IdentityResourceName",
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
            PropertyDescriptor::flag("Emphasize", |r: &Self| r.emphasize, |r, v| r.emphasize = v),
            PropertyDescriptor::flag("Required", |r: &Self| r.required, |r, v| r.required = v),
            PropertyDescriptor::flag(
                "ShowInDiscoveryDocument",
                |r: &Self| r.show_in_discovery_document,
                |r, v| r.show_in_discovery_document = v,
            ),
        ]
    }
}

///
/// IdentityResourceClaim
///

#[derive(Clone, Debug)]
pub struct IdentityResourceClaim {
    pub id: u32,
    pub ty: String,
}
