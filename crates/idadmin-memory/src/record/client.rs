use crate::record::Rows;
use idadmin_core::prelude::*;

///
/// Client
///
/// Backing record for one registered OAuth client. Scalar fields are
/// reachable through the property catalogs; the identifier and the child
/// collections are managed by dedicated operations instead.
///

#[derive(Clone, Debug)]
pub struct Client {
    pub id: u32,
    pub client_id: String,
    pub client_name: String,
    pub enabled: bool,
    pub enable_local_login: bool,
    pub require_consent: bool,
    pub allow_remember_consent: bool,
    pub logo_uri: String,
    pub identity_token_lifetime: i64,
    pub access_token_lifetime: i64,
    pub absolute_refresh_token_lifetime: i64,
    pub sliding_refresh_token_lifetime: i64,
    pub claims: Rows<ClientClaim>,
    pub secrets: Rows<ClientSecret>,
    pub idp_restrictions: Rows<ClientIdpRestriction>,
    pub post_logout_redirect_uris: Rows<ClientPostLogoutRedirectUri>,
    pub redirect_uris: Rows<ClientRedirectUri>,
    pub cors_origins: Rows<ClientCorsOrigin>,
    pub custom_grant_types: Rows<ClientCustomGrantType>,
    pub scopes: Rows<ClientScope>,
}

impl Client {
    /// A fresh record with the conventional token-lifetime defaults
    /// (5 minutes, 1 hour, 30 days, 15 days).
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            client_id: String::new(),
            client_name: String::new(),
            enabled: true,
            enable_local_login: true,
            require_consent: false,
            allow_remember_consent: true,
            logo_uri: String::new(),
            identity_token_lifetime: 300,
            access_token_lifetime: 3_600,
            absolute_refresh_token_lifetime: 2_592_000,
            sliding_refresh_token_lifetime: 1_296_000,
            claims: Rows::new(),
            secrets: Rows::new(),
            idp_restrictions: Rows::new(),
            post_logout_redirect_uris: Rows::new(),
            redirect_uris: Rows::new(),
            cors_origins: Rows::new(),
            custom_grant_types: Rows::new(),
            scopes: Rows::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> ClientSummary {
        ClientSummary {
            subject: self.id.to_string(),
            client_id: self.client_id.clone(),
            client_name: self.client_name.clone(),
        }
    }

    /// Full view: child collections plus the scalar properties materialized
    /// through the update catalog.
    #[must_use]
    pub fn detail(&self, update: &PropertyCatalog<Self>) -> ClientDetail {
        ClientDetail {
            subject: self.id.to_string(),
            client_id: self.client_id.clone(),
            client_name: self.client_name.clone(),
            claims: self
                .claims
                .iter()
                .map(|claim| ClientClaimValue {
                    id: claim.id.to_string(),
                    ty: claim.ty.clone(),
                    value: claim.value.clone(),
                })
                .collect(),
            client_secrets: self
                .secrets
                .iter()
                .map(|secret| ClientSecretValue {
                    id: secret.id.to_string(),
                    ty: secret.ty.clone(),
                    value: secret.value.clone(),
                })
                .collect(),
            identity_provider_restrictions: self
                .idp_restrictions
                .iter()
                .map(|idp| ClientIdpRestrictionValue {
                    id: idp.id.to_string(),
                    provider: idp.provider.clone(),
                })
                .collect(),
            post_logout_redirect_uris: self
                .post_logout_redirect_uris
                .iter()
                .map(|row| ClientPostLogoutRedirectUriValue {
                    id: row.id.to_string(),
                    uri: row.uri.clone(),
                })
                .collect(),
            redirect_uris: self
                .redirect_uris
                .iter()
                .map(|row| ClientRedirectUriValue {
                    id: row.id.to_string(),
                    uri: row.uri.clone(),
                })
                .collect(),
            allowed_cors_origins: self
                .cors_origins
                .iter()
                .map(|row| ClientCorsOriginValue {
                    id: row.id.to_string(),
                    origin: row.origin.clone(),
                })
                .collect(),
            allowed_custom_grant_types: self
                .custom_grant_types
                .iter()
                .map(|row| ClientCustomGrantTypeValue {
                    id: row.id.to_string(),
                    grant_type: row.grant_type.clone(),
                })
                .collect(),
            allowed_scopes: self
                .scopes
                .iter()
                .map(|row| ClientScopeValue {
                    id: row.id.to_string(),
                    scope: row.scope.clone(),
                })
                .collect(),
            properties: update
                .iter()
                .map(|prop| PropertyValue::new(prop.ty(), prop.try_get(self)))
                .collect(),
        }
    }
}

impl PropertyShape for Client {
    fn properties() -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor::text(
                "ClientId",
                |c: &Self| c.client_id.clone(),
                |c, v| c.client_id = v,
            )
            .required(),
            PropertyDescriptor::text(
                "ClientName",
                |c: &Self| c.client_name.clone(),
                |c, v| c.client_name = v,
            )
            .required(),
            PropertyDescriptor::flag("Enabled", |c: &Self| c.enabled, |c, v| c.enabled = v),
            PropertyDescriptor::flag(
                "EnableLocalLogin",
                |c: &Self| c.enable_local_login,
                |c, v| c.enable_local_login = v,
            ),
            PropertyDescriptor::flag(
                "RequireConsent",
                |c: &Self| c.require_consent,
                |c, v| c.require_consent = v,
            ),
            PropertyDescriptor::flag(
                "AllowRememberConsent",
                |c: &Self| c.allow_remember_consent,
                |c, v| c.allow_remember_consent = v,
            ),
            PropertyDescriptor::url(
                "LogoUri",
                |c: &Self| c.logo_uri.clone(),
                |c, v| c.logo_uri = v,
            ),
            PropertyDescriptor::number(
                "IdentityTokenLifetime",
                |c: &Self| c.identity_token_lifetime,
                |c, v| c.identity_token_lifetime = v,
            ),
            PropertyDescriptor::number(
                "AccessTokenLifetime",
                |c: &Self| c.access_token_lifetime,
                |c, v| c.access_token_lifetime = v,
            ),
            PropertyDescriptor::number(
                "AbsoluteRefreshTokenLifetime",
                |c: &Self| c.absolute_refresh_token_lifetime,
                |c, v| c.absolute_refresh_token_lifetime = v,
            ),
            PropertyDescriptor::number(
                "SlidingRefreshTokenLifetime",
                |c: &Self| c.sliding_refresh_token_lifetime,
                |c, v| c.sliding_refresh_token_lifetime = v,
            ),
        ]
    }
}

///
/// Child rows
///

#[derive(Clone, Debug)]
pub struct ClientClaim {
    pub id: u32,
    pub ty: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct ClientSecret {
    pub id: u32,
    pub ty: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct ClientIdpRestriction {
    pub id: u32,
    pub provider: String,
}

#[derive(Clone, Debug)]
pub struct ClientPostLogoutRedirectUri {
    pub id: u32,
    pub uri: String,
}

#[derive(Clone, Debug)]
pub struct ClientRedirectUri {
    pub id: u32,
    pub uri: String,
}

#[derive(Clone, Debug)]
pub struct ClientCorsOrigin {
    pub id: u32,
    pub origin: String,
}

#[derive(Clone, Debug)]
pub struct ClientCustomGrantType {
    pub id: u32,
    pub grant_type: String,
}

#[derive(Clone, Debug)]
pub struct ClientScope {
    pub id: u32,
    pub scope: String,
}
