use crate::property::PropertyValue;
use serde::{Deserialize, Serialize};

///
/// ClientSummary
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub subject: String,
    pub client_id: String,
    pub client_name: String,
}

///
/// ClientDetail
///
/// Summary fields plus child collections and the property vector
/// materialized from the update catalog.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    pub subject: String,
    pub client_id: String,
    pub client_name: String,
    pub claims: Vec<ClientClaimValue>,
    pub client_secrets: Vec<ClientSecretValue>,
    pub identity_provider_restrictions: Vec<ClientIdpRestrictionValue>,
    pub post_logout_redirect_uris: Vec<ClientPostLogoutRedirectUriValue>,
    pub redirect_uris: Vec<ClientRedirectUriValue>,
    pub allowed_cors_origins: Vec<ClientCorsOriginValue>,
    pub allowed_custom_grant_types: Vec<ClientCustomGrantTypeValue>,
    pub allowed_scopes: Vec<ClientScopeValue>,
    pub properties: Vec<PropertyValue>,
}

///
/// Child collection values
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientClaimValue {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretValue {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIdpRestrictionValue {
    pub id: String,
    pub provider: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPostLogoutRedirectUriValue {
    pub id: String,
    pub uri: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRedirectUriValue {
    pub id: String,
    pub uri: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCorsOriginValue {
    pub id: String,
    pub origin: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCustomGrantTypeValue {
    pub id: String,
    pub grant_type: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientScopeValue {
    pub id: String,
    pub scope: String,
}
