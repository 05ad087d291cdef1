use crate::property::PropertyValue;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// ApiResourceSummary
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceSummary {
    pub subject: String,
    pub name: String,
    pub description: String,
}

///
/// ApiResourceDetail
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceDetail {
    pub subject: String,
    pub name: String,
    pub description: String,
    pub resource_claims: Vec<ApiResourceClaimValue>,
    pub resource_scopes: Vec<ApiResourceScopeValue>,
    pub resource_secrets: Vec<ApiResourceSecretValue>,
    pub properties: Vec<PropertyValue>,
}

///
/// Child collection values
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceClaimValue {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceSecretValue {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expiration: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceScopeValue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub emphasize: bool,
    pub required: bool,
    pub show_in_discovery_document: bool,
    pub claims: Vec<ApiResourceScopeClaimValue>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceScopeClaimValue {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
}
