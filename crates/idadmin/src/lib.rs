//! Umbrella crate: re-exports the metadata/validation core and the
//! in-memory reference store under one dependency.

pub use idadmin_core as core;
pub use idadmin_memory as memory;

/// Crate version, surfaced so hosts can report what they embed.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use idadmin_core::prelude::*;
    pub use idadmin_memory::{
        ApiResource, Client, IdentityResource, InMemoryApiResourceService, InMemoryClientService,
        InMemoryIdentityResourceService, seed,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_the_package() {
        assert_eq!(super::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
