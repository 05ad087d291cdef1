//! Demo data for test hosts.

use crate::record::{
    Rows,
    api_resource::{ApiResource, ApiResourceScope},
    client::Client,
    identity_resource::IdentityResource,
};

#[must_use]
pub fn clients() -> Vec<Client> {
    let mut admin = Client::new(1);
    admin.client_id = "admin".to_string();
    admin.client_name = "Admin".to_string();

    let mut manager = Client::new(2);
    manager.client_id = "manager".to_string();
    manager.client_name = "Manager".to_string();

    vec![admin, manager]
}

#[must_use]
pub fn identity_resources() -> Vec<IdentityResource> {
    let mut admin = IdentityResource::new(1);
    admin.name = "Admin".to_string();
    admin.description = "They run the show".to_string();

    let mut manager = IdentityResource::new(2);
    manager.name = "Manager".to_string();
    manager.description = "They pay the bills".to_string();

    vec![admin, manager]
}

#[must_use]
pub fn api_resources() -> Vec<ApiResource> {
    let mut admin = ApiResource::new(1);
    admin.name = "Admin".to_string();
    admin.description = "They run the show".to_string();
    admin.scopes.add(|id| ApiResourceScope {
        id,
        name: "admin.full".to_string(),
        description: "Full access".to_string(),
        emphasize: true,
        required: false,
        show_in_discovery_document: true,
        claims: Rows::new(),
    });

    let mut manager = ApiResource::new(2);
    manager.name = "Manager".to_string();
    manager.description = "They pay the bills".to_string();

    vec![admin, manager]
}
