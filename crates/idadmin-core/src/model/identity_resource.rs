use crate::property::PropertyValue;
use serde::{Deserialize, Serialize};

///
/// IdentityResourceSummary
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResourceSummary {
    pub subject: String,
    pub name: String,
    pub description: String,
}

///
/// IdentityResourceDetail
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResourceDetail {
    pub subject: String,
    pub name: String,
    pub description: String,
    pub claims: Vec<IdentityResourceClaimValue>,
    pub properties: Vec<PropertyValue>,
}

///
/// IdentityResourceClaimValue
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResourceClaimValue {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
}
